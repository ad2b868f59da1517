use crate::modules::reviews::adapters::outbound::frontend_review_store::FrontendReviewStore;
use crate::modules::reviews::adapters::outbound::frontend_review_store_in_memory::InMemoryFrontendReviewStore;
use crate::modules::reviews::adapters::outbound::movie_catalog::{CastLookup, MovieCatalog};
use crate::modules::reviews::adapters::outbound::movie_catalog_in_memory::InMemoryMovieCatalog;
use crate::modules::reviews::adapters::outbound::review_store::ReviewStore;
use crate::modules::reviews::adapters::outbound::review_store_in_memory::InMemoryReviewStore;
use crate::modules::reviews::adapters::outbound::translation::TranslationService;
use crate::modules::reviews::adapters::outbound::translation_in_memory::PhrasebookTranslator;
use crate::modules::reviews::core::validation::ReviewValidator;
use crate::modules::reviews::use_cases::create_review::handler::CreateReviewHandler;
use crate::modules::reviews::use_cases::fetch_movie_detail::handler::FetchMovieDetailHandler;
use crate::modules::reviews::use_cases::fetch_reviews_by_movie::handler::FetchReviewsByMovieHandler;
use crate::modules::reviews::use_cases::frontend_reviews::handler::FrontendReviewsHandler;
use crate::modules::reviews::use_cases::translate_review::handler::TranslateReviewHandler;
use crate::modules::reviews::use_cases::update_review::handler::UpdateReviewHandler;
use crate::shared::core::primitives::{Clock, IdGenerator, RandomIdGenerator, SystemClock};
use crate::shell::seed;
use std::sync::Arc;

/// Long-lived handles to the outside world, built once at startup.
#[derive(Clone)]
pub struct Dependencies {
    pub reviews: Arc<dyn ReviewStore>,
    pub movies: Arc<dyn MovieCatalog>,
    pub cast: Arc<dyn CastLookup>,
    pub frontend_reviews: Arc<dyn FrontendReviewStore>,
    pub translator: Arc<dyn TranslationService>,
    pub ids: Arc<dyn IdGenerator>,
    pub clock: Arc<dyn Clock>,
}

impl Dependencies {
    /// In-memory tables, optionally loaded with the seed data, and the
    /// phrasebook translator.
    pub fn in_memory(seeded: bool) -> Self {
        let (reviews, catalog) = if seeded {
            (
                InMemoryReviewStore::with_reviews(seed::reviews()),
                InMemoryMovieCatalog::with_data(seed::movies(), seed::cast()),
            )
        } else {
            (InMemoryReviewStore::new(), InMemoryMovieCatalog::new())
        };
        let catalog = Arc::new(catalog);
        Self {
            reviews: Arc::new(reviews),
            movies: catalog.clone(),
            cast: catalog,
            frontend_reviews: Arc::new(InMemoryFrontendReviewStore::new()),
            translator: Arc::new(PhrasebookTranslator::new()),
            ids: Arc::new(RandomIdGenerator),
            clock: Arc::new(SystemClock),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub create_review: Arc<CreateReviewHandler>,
    pub fetch_reviews_by_movie: Arc<FetchReviewsByMovieHandler>,
    pub fetch_movie_detail: Arc<FetchMovieDetailHandler>,
    pub update_review: Arc<UpdateReviewHandler>,
    pub translate_review: Arc<TranslateReviewHandler>,
    pub frontend_reviews: Arc<FrontendReviewsHandler>,
}

impl AppState {
    pub fn new(deps: Dependencies) -> Self {
        Self {
            create_review: Arc::new(CreateReviewHandler::new(
                deps.reviews.clone(),
                deps.ids,
                deps.clock,
            )),
            fetch_reviews_by_movie: Arc::new(FetchReviewsByMovieHandler::new(deps.reviews.clone())),
            fetch_movie_detail: Arc::new(FetchMovieDetailHandler::new(deps.movies, deps.cast)),
            update_review: Arc::new(UpdateReviewHandler::new(
                deps.reviews.clone(),
                ReviewValidator::new(),
            )),
            translate_review: Arc::new(TranslateReviewHandler::new(deps.reviews, deps.translator)),
            frontend_reviews: Arc::new(FrontendReviewsHandler::new(deps.frontend_reviews)),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Dependencies::in_memory(false))
    }

    pub fn seeded() -> Self {
        Self::new(Dependencies::in_memory(true))
    }
}
