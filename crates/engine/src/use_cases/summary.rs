//! Sidebar summary use case.
//!
//! Everything the sheet's Willpower and Belly cards display, in one read.

use std::fmt;
use std::sync::Arc;

use onepiece_domain::{belly_fill_percent, ActorId, BellyAmount, HybridPoints, Willpower};
use serde::Serialize;

use crate::entities::ActorSheet;
use crate::infrastructure::ports::PortError;
use crate::infrastructure::settings::ModuleSettings;
use crate::use_cases::willpower::UserRole;

/// View model for the sheet sidebar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetSummary {
    pub willpower: Willpower,
    /// Tooltip explaining the total
    pub willpower_hint: String,
    pub belly: BellyAmount,
    /// Bar fill in `[0, 100]`
    pub belly_fill_percent: f64,
    /// `None` when the pool is disabled.
    pub hybrid_points: Option<HybridPoints>,
    pub can_edit_willpower: bool,
}

impl fmt::Display for SheetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Willpower: {}", self.willpower)?;
        write!(
            f,
            "Belly: {} [{:.1}%]",
            self.belly, self.belly_fill_percent
        )?;
        if let Some(pool) = &self.hybrid_points {
            write!(f, "\nHybrid Points: {}", pool)?;
        }
        Ok(())
    }
}

pub struct BuildSheetSummary {
    sheet: Arc<ActorSheet>,
    settings: Arc<ModuleSettings>,
}

impl BuildSheetSummary {
    pub fn new(sheet: Arc<ActorSheet>, settings: Arc<ModuleSettings>) -> Self {
        Self { sheet, settings }
    }

    pub async fn execute(
        &self,
        actor_id: ActorId,
        viewer: UserRole,
    ) -> Result<SheetSummary, PortError> {
        let record = self.sheet.record(actor_id).await?;
        let level = self.sheet.level_of(&record);
        let bonus = self.sheet.willpower_bonus(actor_id).await?;
        let belly = self.sheet.belly(actor_id).await?;
        let willpower = Willpower::new(level, bonus);

        let hybrid_points = self
            .settings
            .hybrid_points_enabled
            .then(|| self.sheet.hybrid_points_of(&record));

        Ok(SheetSummary {
            willpower_hint: willpower.formula_hint(),
            willpower,
            belly,
            belly_fill_percent: belly_fill_percent(belly, self.settings.belly_cap),
            hybrid_points,
            can_edit_willpower: viewer.can_edit_willpower(),
        })
    }
}
