pub mod cat {
    pub mod entity;
    pub mod repository;
}
