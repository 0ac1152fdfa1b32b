pub mod application {
    pub mod cart {
        pub mod quote;
    }
    pub mod catalog {
        pub mod browse;
        pub mod list_categories;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_active;
        pub mod get_all;
        pub mod get_by_id;
        pub mod set_active;
        pub mod set_discount;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod quote;
        }
    }
    pub mod catalog {
        pub mod categories;
        pub mod errors;
        pub mod pipeline;
        pub mod query;
        pub mod use_cases {
            pub mod browse;
            pub mod list_categories;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod pricing;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_active;
            pub mod get_all;
            pub mod get_by_id;
            pub mod set_active;
            pub mod set_discount;
            pub mod update;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support;
