//! Solver registry built from inventory-submitted plugins

use crate::error::RegistrationError;
use crate::solver::DaySolver;
use std::collections::BTreeMap;

/// Days per year in AoC (1-25)
pub const DAYS_PER_YEAR: u8 = 25;

/// Plugin entry announcing a solver for a specific year and day.
///
/// Solution crates submit these with `inventory::submit!`; the runner collects
/// them with [`SolverRegistry::from_plugins`].
pub struct DayPlugin {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// The solver instance (type-erased)
    pub solver: &'static dyn DaySolver,
}

inventory::collect!(DayPlugin);

/// Immutable registry of the solvers registered for one year, ordered by day.
pub struct SolverRegistry {
    year: u16,
    days: BTreeMap<u8, &'static dyn DaySolver>,
}

impl std::fmt::Debug for SolverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolverRegistry")
            .field("year", &self.year)
            .field("days", &self.days.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl SolverRegistry {
    /// Collect every submitted [`DayPlugin`] for `year`.
    ///
    /// # Errors
    /// * [`RegistrationError::InvalidDay`] - a plugin's day is outside 1-25
    /// * [`RegistrationError::DuplicateSolver`] - two plugins claim the same day
    pub fn from_plugins(year: u16) -> Result<Self, RegistrationError> {
        Self::from_entries(
            year,
            inventory::iter::<DayPlugin>()
                .filter(|p| p.year == year)
                .map(|p| (p.day, p.solver)),
        )
    }

    /// Build a registry from explicit (day, solver) entries.
    ///
    /// `from_plugins` goes through here; tests use it directly to avoid the
    /// process-global plugin list.
    pub fn from_entries(
        year: u16,
        entries: impl IntoIterator<Item = (u8, &'static dyn DaySolver)>,
    ) -> Result<Self, RegistrationError> {
        let mut days: BTreeMap<u8, &'static dyn DaySolver> = BTreeMap::new();
        for (day, solver) in entries {
            if day == 0 || day > DAYS_PER_YEAR {
                return Err(RegistrationError::InvalidDay(year, day));
            }
            if days.insert(day, solver).is_some() {
                return Err(RegistrationError::DuplicateSolver(year, day));
            }
        }
        Ok(Self { year, days })
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    /// Look up the solver for a day, if one is registered.
    pub fn get(&self, day: u8) -> Option<&'static dyn DaySolver> {
        self.days.get(&day).copied()
    }

    /// Registered day numbers in ascending order.
    pub fn days(&self) -> impl Iterator<Item = u8> + '_ {
        self.days.keys().copied()
    }

    /// The highest registered day number, if any solver is registered.
    pub fn latest_day(&self) -> Option<u8> {
        self.days.keys().next_back().copied()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
