//! Chart-ready series derived from a quote collection.
//!
//! Daily series are grouped by calendar date in a `BTreeMap` and emitted in
//! ascending date order, independent of the order the quotes arrive in.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::format::day_label;
use crate::models::{Quote, RevenuePoint, ServiceCount, ServiceType, VolumePoint};

pub struct ChartQuery<'a> {
    quotes: &'a [Quote],
}

impl<'a> ChartQuery<'a> {
    pub fn new(quotes: &'a [Quote]) -> Self {
        Self { quotes }
    }

    /// Revenue and quote count per day, oldest day first.
    pub fn revenue_by_day(&self) -> Vec<RevenuePoint> {
        let mut by_day: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
        for quote in self.quotes {
            let entry = by_day.entry(quote.date).or_insert((0.0, 0));
            entry.0 += quote.quote_amount;
            entry.1 += 1;
        }

        by_day
            .into_iter()
            .map(|(date, (revenue, count))| RevenuePoint {
                date,
                label: day_label(date),
                revenue,
                count,
            })
            .collect()
    }

    /// Quote count per service type present in the input.
    ///
    /// Entries follow [`ServiceType::ALL`] order; absent types are omitted.
    pub fn count_by_service(&self) -> Vec<ServiceCount> {
        let mut counts: BTreeMap<ServiceType, usize> = BTreeMap::new();
        for quote in self.quotes {
            *counts.entry(quote.service_type).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .map(|(service_type, count)| ServiceCount {
                service_type,
                count,
            })
            .collect()
    }

    /// Quote count per day, oldest day first.
    pub fn count_by_day(&self) -> Vec<VolumePoint> {
        let mut by_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
        for quote in self.quotes {
            *by_day.entry(quote.date).or_insert(0) += 1;
        }

        by_day
            .into_iter()
            .map(|(date, count)| VolumePoint {
                date,
                label: day_label(date),
                count,
            })
            .collect()
    }
}
