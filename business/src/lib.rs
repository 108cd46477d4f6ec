pub mod application {
    pub mod catalog {
        pub mod image;
        pub mod repository;
        pub mod view_state;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod catalog {
        pub mod repository;
        pub mod snapshot;
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod store;
        pub mod value_objects;
    }
}
