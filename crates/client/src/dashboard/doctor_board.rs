use std::future::Future;

use shared_types::{Doctor, DoctorFilter};

use crate::directory::DoctorDirectory;
use crate::generation::RequestGeneration;

pub const NO_DOCTORS: &str = "No doctors available.";
pub const NO_FILTER_MATCHES: &str = "No doctors found with the given filters.";

/// What the doctor list area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DoctorListing {
    Cards(Vec<Doctor>),
    Empty(&'static str),
}

impl DoctorListing {
    fn from_doctors(doctors: Vec<Doctor>, empty: &'static str) -> Self {
        if doctors.is_empty() {
            DoctorListing::Empty(empty)
        } else {
            DoctorListing::Cards(doctors)
        }
    }

    /// Drop the card for `doctor_id`, leaving the others in place.
    pub fn remove(&mut self, doctor_id: i64) {
        if let DoctorListing::Cards(doctors) = self {
            doctors.retain(|d| d.id != doctor_id);
        }
    }
}

/// A committed response for the doctor list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardUpdate {
    pub listing: DoctorListing,
    /// Shown as a notification when the filter request itself failed.
    pub alert: Option<String>,
}

/// Doctor listing with filtering, shared by the admin and patient dashboards.
///
/// `load` and `filter` take their request ticket when called; the returned
/// future resolves to `None` if a newer request was issued meanwhile.
#[derive(Debug, Clone)]
pub struct DoctorBoard<D> {
    directory: D,
    generation: RequestGeneration,
}

impl<D: DoctorDirectory + Clone> DoctorBoard<D> {
    pub fn new(directory: D) -> Self {
        Self {
            directory,
            generation: RequestGeneration::new(),
        }
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    pub fn load(&self) -> impl Future<Output = Option<BoardUpdate>> + 'static
    where
        D: 'static,
    {
        let directory = self.directory.clone();
        let generation = self.generation.clone();
        let ticket = generation.issue();
        async move {
            let doctors = directory.list().await;
            if !generation.is_current(ticket) {
                tracing::debug!("Dropping stale doctor list");
                return None;
            }
            Some(BoardUpdate {
                listing: DoctorListing::from_doctors(doctors, NO_DOCTORS),
                alert: None,
            })
        }
    }

    /// Every input change calls this; there is no debouncing.
    pub fn filter(&self, filter: DoctorFilter) -> impl Future<Output = Option<BoardUpdate>> + 'static
    where
        D: 'static,
    {
        let directory = self.directory.clone();
        let generation = self.generation.clone();
        let ticket = generation.issue();
        async move {
            let query = directory.filter(&filter).await;
            if !generation.is_current(ticket) {
                tracing::debug!(?filter, "Dropping stale filter result");
                return None;
            }
            Some(BoardUpdate {
                listing: DoctorListing::from_doctors(query.doctors, NO_FILTER_MATCHES),
                alert: query.alert,
            })
        }
    }
}
