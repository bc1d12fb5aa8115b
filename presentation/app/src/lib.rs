pub mod config {
    pub mod app_config;
    pub mod network_config;
}
pub mod setup {
    pub mod dependency_injection;
    pub mod screens;
}
pub mod view_models {
    pub mod cat_details;
    pub mod cats_list;
    pub mod state;
}
