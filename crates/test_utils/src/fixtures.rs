//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for folio tests. Time is pinned so that
//! business dates and void timestamps are predictable.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use core_kernel::{EmployeeId, FixedClock, FolioId, Timezone};
use domain_folio::{Folio, FolioLedger, FolioType};

/// Fixture for clock and date test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// 2024-05-02 03:00 UTC, which is 10:00 on 2024-05-02 in Ho Chi Minh City
    pub fn frozen_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 2, 3, 0, 0).unwrap()
    }

    /// Business date at [`TemporalFixtures::frozen_instant`]
    pub fn business_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()
    }

    /// 2024-05-01 18:30 UTC: still May 1st in UTC, already May 2nd at the hotel
    pub fn late_evening_utc() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 18, 30, 0).unwrap()
    }

    pub fn check_in() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    pub fn check_out() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 4).unwrap()
    }

    /// Clock frozen at [`TemporalFixtures::frozen_instant`]
    pub fn fixed_clock() -> Arc<FixedClock> {
        Arc::new(FixedClock::at(Self::frozen_instant()))
    }
}

/// Fixture for ledger engines
pub struct LedgerFixtures;

impl LedgerFixtures {
    /// Ledger on a frozen clock in the default property timezone
    pub fn ledger() -> FolioLedger {
        FolioLedger::new(TemporalFixtures::fixed_clock(), Timezone::default())
    }

    /// Ledger sharing a clock the test can move
    pub fn ledger_with_clock(clock: Arc<FixedClock>) -> FolioLedger {
        FolioLedger::new(clock, Timezone::default())
    }

    pub fn front_desk_clerk() -> EmployeeId {
        EmployeeId::new("EMP-001")
    }

    pub fn night_auditor() -> EmployeeId {
        EmployeeId::new("EMP-042")
    }
}

/// Fixture for empty folios
pub struct FolioFixtures;

impl FolioFixtures {
    /// Empty guest folio for the standard stay
    pub fn guest(folio_id: &str, guest_name: &str, room_number: &str) -> Folio {
        Folio::new(
            folio_id,
            FolioType::Guest,
            guest_name,
            room_number,
            TemporalFixtures::check_in(),
            TemporalFixtures::check_out(),
        )
    }

    /// Empty walk-in folio without a room
    pub fn walk_in(folio_id: &str, guest_name: &str) -> Folio {
        Folio::new(
            folio_id,
            FolioType::NoResident,
            guest_name,
            "",
            TemporalFixtures::business_date(),
            TemporalFixtures::business_date(),
        )
    }

    pub fn folio_id(value: &str) -> FolioId {
        FolioId::new(value)
    }
}
