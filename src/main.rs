//! Visa Advisor server binary.

use std::sync::Arc;

use http::HeaderValue;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use visa_advisor::adapters::http::{api_router, ConsultationHandlers, RuleAdminHandlers, VisaTypeState};
use visa_advisor::adapters::store::{
    load_knowledge, InMemoryConsultationStore, InMemoryRuleStore, InMemoryVisaTypeDirectory,
    KnowledgeFiles,
};
use visa_advisor::application::handlers::consultation::{
    AnswerQuestionHandler, GetConsultationStateHandler, RestartConsultationHandler,
    StartConsultationHandler, StepBackHandler,
};
use visa_advisor::application::handlers::rules::{
    AutoOrganizeHandler, CreateRuleHandler, DeleteRuleHandler, ListRulesHandler,
    ReorderRulesHandler, UpdateRuleHandler, ValidateRulesHandler,
};
use visa_advisor::application::handlers::visa_types::VisaTypeHandlers;
use visa_advisor::config::AppConfig;
use visa_advisor::ports::{ConsultationRepository, RuleStore, VisaTypeDirectory};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("fatal: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    // Seed the stores from the knowledge files.
    let files = KnowledgeFiles {
        rules_file: config.knowledge.rules_file.clone(),
        visa_types_file: config.knowledge.visa_types_file.clone(),
    };
    let (snapshot, visa_types) = load_knowledge(&files).await?;

    let rule_store: Arc<dyn RuleStore> = Arc::new(InMemoryRuleStore::new(snapshot));
    let consultations: Arc<dyn ConsultationRepository> =
        Arc::new(InMemoryConsultationStore::new());
    let directory: Arc<dyn VisaTypeDirectory> =
        Arc::new(InMemoryVisaTypeDirectory::new(visa_types));

    let consultation_handlers = ConsultationHandlers::new(
        Arc::new(StartConsultationHandler::new(
            rule_store.clone(),
            consultations.clone(),
        )),
        Arc::new(AnswerQuestionHandler::new(consultations.clone())),
        Arc::new(StepBackHandler::new(consultations.clone())),
        Arc::new(RestartConsultationHandler::new(consultations.clone())),
        Arc::new(GetConsultationStateHandler::new(consultations.clone())),
    );

    let rule_handlers = RuleAdminHandlers::new(
        Arc::new(ListRulesHandler::new(rule_store.clone(), directory.clone())),
        Arc::new(CreateRuleHandler::new(rule_store.clone(), directory.clone())),
        Arc::new(UpdateRuleHandler::new(rule_store.clone(), directory.clone())),
        Arc::new(DeleteRuleHandler::new(rule_store.clone(), directory.clone())),
        Arc::new(ReorderRulesHandler::new(rule_store.clone())),
        Arc::new(AutoOrganizeHandler::new(rule_store.clone())),
        Arc::new(ValidateRulesHandler::new(
            rule_store.clone(),
            directory.clone(),
        )),
    );

    let visa_type_state = VisaTypeState::new(Arc::new(VisaTypeHandlers::new(directory.clone())));

    let app = api_router(consultation_handlers, rule_handlers, visa_type_state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(&config)),
    );

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "visa-advisor listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins = config.server.cors_origins_list();
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| o.parse::<HeaderValue>().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}
