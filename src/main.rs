pub mod modules;
pub use modules::assets;
pub use modules::catalog;
pub use modules::users;
pub mod health;

use crate::assets::adapter::outgoing::local_disk_store::LocalDiskAssetStore;
use crate::assets::application::domain::policies::upload_policy::UploadPolicy;
use crate::catalog::adapter::outgoing::{
    MaterialRepositoryPostgres, SubjectRepositoryPostgres, TopicRepositoryPostgres,
};
use crate::catalog::application::ports::incoming::use_cases::{
    AddTopicUseCase, CreateSubjectUseCase, DeleteMaterialUseCase, DeleteSubjectUseCase,
    GetSubjectDetailUseCase, ListSubjectsUseCase, RemoveTopicUseCase, UpdateSubjectUseCase,
    UploadMaterialToSubjectUseCase, UploadMaterialToTopicUseCase,
};
use crate::catalog::application::ports::outgoing::completion_source::NoCompletionTracking;
use crate::catalog::application::services::{
    AddTopicService, CreateSubjectService, DeleteMaterialService, DeleteSubjectService,
    GetSubjectDetailService, ListSubjectsService, RemoveTopicService, UpdateSubjectService,
    UploadToSubjectService, UploadToTopicService,
};
use crate::users::adapter::outgoing::user_directory_postgres::UserDirectoryPostgres;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub list_subjects_use_case: Arc<dyn ListSubjectsUseCase + Send + Sync>,
    pub get_subject_detail_use_case: Arc<dyn GetSubjectDetailUseCase + Send + Sync>,
    pub create_subject_use_case: Arc<dyn CreateSubjectUseCase + Send + Sync>,
    pub update_subject_use_case: Arc<dyn UpdateSubjectUseCase + Send + Sync>,
    pub delete_subject_use_case: Arc<dyn DeleteSubjectUseCase + Send + Sync>,
    pub add_topic_use_case: Arc<dyn AddTopicUseCase + Send + Sync>,
    pub remove_topic_use_case: Arc<dyn RemoveTopicUseCase + Send + Sync>,
    pub upload_to_subject_use_case: Arc<dyn UploadMaterialToSubjectUseCase + Send + Sync>,
    pub upload_to_topic_use_case: Arc<dyn UploadMaterialToTopicUseCase + Send + Sync>,
    pub delete_material_use_case: Arc<dyn DeleteMaterialUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Asset storage
    let upload_policy = UploadPolicy::from_env();
    let asset_store = LocalDiskAssetStore::from_policy(&upload_policy);

    // Repositories
    let subject_repo = SubjectRepositoryPostgres::new(Arc::clone(&db_arc));
    let topic_repo = TopicRepositoryPostgres::new(Arc::clone(&db_arc));
    let material_repo = MaterialRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_directory = UserDirectoryPostgres::new(Arc::clone(&db_arc));

    // No tracker is wired in yet; every subject reports zero completed
    // lessons until one is.
    let completion = NoCompletionTracking;

    // Use cases
    let list_subjects_use_case = ListSubjectsService::new(
        subject_repo.clone(),
        material_repo.clone(),
        user_directory.clone(),
        completion.clone(),
    );
    let get_subject_detail_use_case = GetSubjectDetailService::new(
        subject_repo.clone(),
        topic_repo.clone(),
        material_repo.clone(),
        user_directory.clone(),
        completion,
    );
    let create_subject_use_case =
        CreateSubjectService::new(subject_repo.clone(), user_directory.clone());
    let update_subject_use_case = UpdateSubjectService::new(subject_repo.clone(), user_directory);
    let delete_subject_use_case = DeleteSubjectService::new(
        subject_repo.clone(),
        material_repo.clone(),
        asset_store.clone(),
    );
    let add_topic_use_case = AddTopicService::new(topic_repo.clone(), subject_repo.clone());
    let remove_topic_use_case = RemoveTopicService::new(
        topic_repo.clone(),
        material_repo.clone(),
        asset_store.clone(),
    );
    let upload_to_subject_use_case = UploadToSubjectService::new(
        subject_repo,
        material_repo.clone(),
        asset_store.clone(),
        upload_policy.clone(),
    );
    let upload_to_topic_use_case = UploadToTopicService::new(
        topic_repo,
        material_repo.clone(),
        asset_store.clone(),
        upload_policy,
    );
    let delete_material_use_case = DeleteMaterialService::new(material_repo, asset_store);

    let state = AppState {
        list_subjects_use_case: Arc::new(list_subjects_use_case),
        get_subject_detail_use_case: Arc::new(get_subject_detail_use_case),
        create_subject_use_case: Arc::new(create_subject_use_case),
        update_subject_use_case: Arc::new(update_subject_use_case),
        delete_subject_use_case: Arc::new(delete_subject_use_case),
        add_topic_use_case: Arc::new(add_topic_use_case),
        remove_topic_use_case: Arc::new(remove_topic_use_case),
        upload_to_subject_use_case: Arc::new(upload_to_subject_use_case),
        upload_to_topic_use_case: Arc::new(upload_to_topic_use_case),
        delete_material_use_case: Arc::new(delete_material_use_case),
    };

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
