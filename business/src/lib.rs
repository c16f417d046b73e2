pub mod application {
    pub mod advice {
        pub mod ask;
    }
    pub mod health {
        pub mod check;
    }
}

pub mod domain {
    pub mod logger;
    pub mod advice {
        pub mod errors;
        pub mod model;
        pub mod prompt;
        pub mod services;
        pub mod use_cases {
            pub mod ask;
        }
    }
    pub mod health {
        pub mod model;
        pub mod use_cases {
            pub mod check;
        }
    }
}
