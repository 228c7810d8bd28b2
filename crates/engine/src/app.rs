//! Application state and composition.

use std::sync::Arc;

use onepiece_domain::LevelResolver;

use crate::api::SheetEventHandler;
use crate::entities::ActorSheet;
use crate::infrastructure::hooks::HybridPointsMirror;
use crate::infrastructure::ports::ActorDocumentPort;
use crate::infrastructure::settings::ModuleSettings;
use crate::use_cases;

/// Main application state.
///
/// Holds the sheet entity, all use cases and the host event handler.
pub struct App {
    pub settings: Arc<ModuleSettings>,
    pub sheet: Arc<ActorSheet>,
    pub use_cases: UseCases,
    pub events: Arc<SheetEventHandler>,
}

/// Container for all use cases.
pub struct UseCases {
    pub currency: use_cases::CurrencyUseCases,
    pub hybrid_points: Arc<use_cases::HybridPointsUseCases>,
    pub willpower: use_cases::WillpowerUseCases,
    pub summary: Arc<use_cases::BuildSheetSummary>,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(docs: Arc<dyn ActorDocumentPort>, settings: ModuleSettings) -> Self {
        let settings = Arc::new(settings);
        let levels = Arc::new(LevelResolver::dnd5e());
        let sheet = Arc::new(ActorSheet::new(docs, settings.namespace.clone(), levels));

        let currency = use_cases::CurrencyUseCases::new(
            Arc::new(use_cases::currency::ConvertCoinsToBelly::new(sheet.clone())),
            Arc::new(use_cases::currency::ConvertBellyToCoins::new(sheet.clone())),
            Arc::new(use_cases::currency::AddBelly::new(sheet.clone())),
        );

        let adjust = Arc::new(use_cases::hybrid_points::AdjustHybridPoints::new(
            sheet.clone(),
            settings.clone(),
        ));
        let hybrid_points = Arc::new(use_cases::HybridPointsUseCases::new(
            adjust.clone(),
            Arc::new(use_cases::hybrid_points::ResetOnLongRest::new(adjust.clone())),
            Arc::new(use_cases::hybrid_points::AwardOnHit::new(
                adjust,
                settings.clone(),
            )),
            Arc::new(use_cases::hybrid_points::SyncResourceMirror::new(
                sheet.clone(),
                settings.clone(),
            )),
        ));

        let willpower = use_cases::WillpowerUseCases::new(
            Arc::new(use_cases::willpower::GetWillpower::new(sheet.clone())),
            Arc::new(use_cases::willpower::SetWillpowerBonus::new(sheet.clone())),
            Arc::new(use_cases::willpower::WillpowerRollData::new(sheet.clone())),
        );

        let summary = Arc::new(use_cases::BuildSheetSummary::new(
            sheet.clone(),
            settings.clone(),
        ));

        let events = Arc::new(SheetEventHandler::new(hybrid_points.clone()));

        Self {
            settings,
            sheet,
            use_cases: UseCases {
                currency,
                hybrid_points,
                willpower,
                summary,
            },
            events,
        }
    }

    /// Pre-update interceptor for the host's document pipeline.
    pub fn hybrid_points_mirror(settings: &ModuleSettings) -> Arc<HybridPointsMirror> {
        Arc::new(HybridPointsMirror::new(
            settings.clone(),
            Arc::new(LevelResolver::dnd5e()),
        ))
    }
}
