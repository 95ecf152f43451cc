//! Master folio consolidation
//!
//! A company paying for several rooms gets one MASTER folio. Room charges on
//! each guest folio are moved onto it one transfer at a time, always against
//! the latest master value, so the master's history lists them in guest-folio
//! order and then posting order.

use std::collections::HashSet;

use rust_decimal::Decimal;
use tracing::{debug, info};

use core_kernel::FolioId;

use crate::error::FolioError;
use crate::folio::{Folio, FolioType};
use crate::ledger::FolioLedger;
use crate::transaction::TransactionType;

/// Guest folios and master folio after consolidation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterConsolidation {
    pub guest_folios: Vec<Folio>,
    pub master_folio: Folio,
}

impl FolioLedger {
    /// Opens an empty MASTER folio covering the given guest folios
    ///
    /// The company name becomes the folio's guest name, the room number lists
    /// every guest room (comma separated), and the stay dates and currency
    /// come from the first guest folio.
    ///
    /// # Errors
    ///
    /// - `NoGuestFolios` if `guest_folios` is empty
    /// - `DuplicateGuestFolio` if a folio id appears twice
    pub fn create_master_folio(
        &self,
        guest_folios: &[Folio],
        company_name: &str,
    ) -> Result<Folio, FolioError> {
        let first = guest_folios.first().ok_or(FolioError::NoGuestFolios)?;
        ensure_distinct(guest_folios)?;

        let room_numbers = guest_folios
            .iter()
            .map(|f| f.room_number.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let linked: Vec<FolioId> = guest_folios.iter().map(|f| f.folio_id.clone()).collect();

        let master = Folio {
            folio_id: FolioId::generate(),
            folio_type: FolioType::Master,
            guest_name: company_name.to_string(),
            room_number: room_numbers,
            check_in_date: first.check_in_date,
            check_out_date: first.check_out_date,
            balance: Decimal::ZERO,
            transactions: Vec::new(),
            linked_folios: Some(linked),
            master_folio_id: None,
            currency: first.currency,
        };

        debug!(
            master_folio_id = %master.folio_id,
            company = company_name,
            linked = guest_folios.len(),
            "Opened master folio"
        );

        Ok(master)
    }

    /// Transfers every counted ROOM_CHARGE of every guest folio to the master
    ///
    /// Transfers run strictly in sequence. If any of them fails the whole
    /// consolidation fails and none of the inputs change. Each guest folio
    /// may appear once; a repeated id would move its charges twice.
    pub fn transfer_room_charges_to_master(
        &self,
        guest_folios: &[Folio],
        master_folio: &Folio,
    ) -> Result<MasterConsolidation, FolioError> {
        ensure_distinct(guest_folios)?;

        let mut master = master_folio.clone();
        let mut updated_guests = Vec::with_capacity(guest_folios.len());
        let mut moved = 0usize;

        for guest in guest_folios {
            let mut guest = guest.clone();
            let room_charge_ids: Vec<_> = guest
                .counted_transactions()
                .filter(|t| t.transaction_type == TransactionType::RoomCharge)
                .map(|t| t.id.clone())
                .collect();

            for transaction_id in &room_charge_ids {
                self.apply_transfer(&mut guest, &mut master, transaction_id)?;
                moved += 1;
            }

            updated_guests.push(guest);
        }

        info!(
            master_folio_id = %master.folio_id,
            guest_folios = guest_folios.len(),
            room_charges = moved,
            balance = %master.balance,
            "Consolidated room charges into master folio"
        );

        Ok(MasterConsolidation {
            guest_folios: updated_guests,
            master_folio: master,
        })
    }
}

fn ensure_distinct(guest_folios: &[Folio]) -> Result<(), FolioError> {
    let mut seen = HashSet::with_capacity(guest_folios.len());
    for folio in guest_folios {
        if !seen.insert(&folio.folio_id) {
            return Err(FolioError::DuplicateGuestFolio(folio.folio_id.clone()));
        }
    }
    Ok(())
}
