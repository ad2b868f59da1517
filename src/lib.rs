pub mod shared {
    pub mod core {
        pub mod primitives;
    }
}

pub mod modules {
    pub mod reviews {
        pub mod core {
            pub mod frontend_review;
            pub mod identifiers;
            pub mod movie;
            pub mod review;
            pub mod validation;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod create_review {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod fetch_reviews_by_movie {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod fetch_movie_detail {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_review {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod translate_review {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod frontend_reviews {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http_support;
            }
            pub mod outbound {
                pub mod frontend_review_store;
                pub mod frontend_review_store_in_memory;
                pub mod movie_catalog;
                pub mod movie_catalog_in_memory;
                pub mod review_store;
                pub mod review_store_in_memory;
                pub mod translation;
                pub mod translation_http;
                pub mod translation_in_memory;
            }
        }
    }
}

pub mod shell;
