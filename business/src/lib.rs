pub mod application {
    pub mod cat {
        pub mod get_all;
        pub mod get_details;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod cat {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_details;
        }
    }
    pub mod shared {
        pub mod either;
    }
}
