pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod clear;
        pub mod get_cart;
        pub mod remove_item;
        pub mod update_quantity;
    }
    pub mod catalog {
        pub mod get_all;
        pub mod get_by_id;
    }
    pub mod order {
        pub mod submit;
    }
    pub mod settings {
        pub mod get;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod store;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear;
            pub mod get_cart;
            pub mod remove_item;
            pub mod update_quantity;
        }
    }
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod pricing;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod formatter;
        pub mod messenger;
        pub mod use_cases {
            pub mod submit;
        }
    }
    pub mod settings {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get;
            pub mod update;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
