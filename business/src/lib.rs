pub mod application {
    pub mod cart {
        pub mod add_product;
        pub mod store;
    }
    pub mod catalog {
        pub mod get_product_card;
        pub mod load_storefront;
        pub mod product_card;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod translation;
        pub mod value_objects;
    }
    pub mod catalog {
        pub mod errors;
        pub mod gateway;
        pub mod media;
        pub mod model;
        pub mod storefront;
        pub mod use_cases {
            pub mod get_product_card;
            pub mod load_storefront;
        }
    }
    pub mod cart {
        pub mod errors;
        pub mod events;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_product;
        }
    }
}
