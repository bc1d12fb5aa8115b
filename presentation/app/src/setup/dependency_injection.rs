use std::sync::Arc;

use business::application::cat::get_all::GetCatsUseCaseImpl;
use business::application::cat::get_details::GetCatDetailsUseCaseImpl;
use business::domain::cat::use_cases::get_all::GetCatsUseCase;
use business::domain::cat::use_cases::get_details::GetCatDetailsUseCase;
use business::domain::logger::Logger;
use data::cat::repository::CatRepositoryHttp;
use logger::TracingLogger;
use network::cataas_network::CataasNetwork;
use network::reqwest_client::{ClientOptions, ReqwestHttpClient};

use crate::config::network_config::NetworkConfig;
use crate::view_models::cat_details::CatDetailsViewModel;
use crate::view_models::cats_list::CatsListViewModel;

/// Composition root. Everything here lives for the whole process and is
/// shared by the view models it hands out.
pub struct DependencyContainer {
    pub logger: Arc<dyn Logger>,
    pub get_cats_use_case: Arc<dyn GetCatsUseCase>,
    pub get_cat_details_use_case: Arc<dyn GetCatDetailsUseCase>,
}

impl DependencyContainer {
    pub fn new(config: &NetworkConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger::new());

        // Infrastructure adapters
        let options = ClientOptions {
            timeout: config.timeout,
            ..ClientOptions::default()
        };
        let transport = ReqwestHttpClient::new(config.base_url.clone(), options, logger.clone())?;
        let network = Arc::new(CataasNetwork::new(Arc::new(transport)));
        let cat_repository = Arc::new(CatRepositoryHttp::new(network));

        // Cat use cases
        let get_cats_use_case = Arc::new(GetCatsUseCaseImpl {
            repository: cat_repository.clone(),
            logger: logger.clone(),
        });
        let get_cat_details_use_case = Arc::new(GetCatDetailsUseCaseImpl {
            repository: cat_repository,
            logger: logger.clone(),
        });

        Ok(Self {
            logger,
            get_cats_use_case,
            get_cat_details_use_case,
        })
    }

    pub fn cats_list_view_model(&self, limit: u32) -> CatsListViewModel {
        CatsListViewModel::new(self.get_cats_use_case.clone(), self.logger.clone(), limit)
    }

    pub fn cat_details_view_model(&self, cat_id: impl Into<String>) -> CatDetailsViewModel {
        CatDetailsViewModel::new(
            self.get_cat_details_use_case.clone(),
            self.logger.clone(),
            cat_id,
        )
    }
}
