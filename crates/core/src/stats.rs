//! Aggregate statistics over the full service record set.

use serde::Serialize;

use crate::record::{ServiceRecord, ServiceStatus, ServiceType};

/// Per-type record counts, nested under `servicesByType` on the wire.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct ServicesByType {
    pub maintenance: usize,
    pub repair: usize,
    pub inspection: usize,
    pub installation: usize,
}

/// Aggregate statistics over the current record set.
///
/// A pure function of store state -- recomputed per request, never cached.
#[derive(Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStats {
    pub total_services: usize,
    pub completed_services: usize,
    pub in_progress_services: usize,
    pub scheduled_services: usize,
    pub cancelled_services: usize,
    pub total_cost: f64,
    pub average_cost: f64,
    pub services_by_type: ServicesByType,
}

/// Compute statistics over `records` in a single pass.
///
/// `average_cost` is 0 for an empty set (no division by zero).
pub fn compute_stats(records: &[ServiceRecord]) -> ServiceStats {
    let mut stats = ServiceStats::default();

    for record in records {
        stats.total_services += 1;
        stats.total_cost += record.cost;

        match record.status {
            ServiceStatus::Scheduled => stats.scheduled_services += 1,
            ServiceStatus::InProgress => stats.in_progress_services += 1,
            ServiceStatus::Completed => stats.completed_services += 1,
            ServiceStatus::Cancelled => stats.cancelled_services += 1,
        }

        match record.service_type {
            ServiceType::Maintenance => stats.services_by_type.maintenance += 1,
            ServiceType::Repair => stats.services_by_type.repair += 1,
            ServiceType::Inspection => stats.services_by_type.inspection += 1,
            ServiceType::Installation => stats.services_by_type.installation += 1,
        }
    }

    if stats.total_services > 0 {
        stats.average_cost = stats.total_cost / stats.total_services as f64;
    }

    stats
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(service_type: ServiceType, status: ServiceStatus, cost: f64) -> ServiceRecord {
        let now = Utc::now();
        ServiceRecord {
            id: format!("SRV{cost:09.0}"),
            name: "test".to_string(),
            service_type,
            provider: "P".to_string(),
            cost,
            status,
            scheduled_date: "2024-01-01".to_string(),
            generator_id: None,
            description: "d".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn empty_set_yields_all_zeros_without_division_error() {
        let stats = compute_stats(&[]);
        assert_eq!(stats, ServiceStats::default());
        assert_eq!(stats.average_cost, 0.0);
    }

    #[test]
    fn counts_costs_and_average_over_a_mixed_set() {
        let records = vec![
            record(ServiceType::Maintenance, ServiceStatus::Scheduled, 100.0),
            record(ServiceType::Maintenance, ServiceStatus::Completed, 200.0),
            record(ServiceType::Repair, ServiceStatus::InProgress, 300.0),
            record(ServiceType::Inspection, ServiceStatus::Cancelled, 400.0),
        ];

        let stats = compute_stats(&records);

        assert_eq!(stats.total_services, 4);
        assert_eq!(stats.scheduled_services, 1);
        assert_eq!(stats.completed_services, 1);
        assert_eq!(stats.in_progress_services, 1);
        assert_eq!(stats.cancelled_services, 1);
        assert_eq!(stats.total_cost, 1000.0);
        assert_eq!(stats.average_cost, 250.0);
        assert_eq!(stats.services_by_type.maintenance, 2);
        assert_eq!(stats.services_by_type.repair, 1);
        assert_eq!(stats.services_by_type.inspection, 1);
        assert_eq!(stats.services_by_type.installation, 0);
    }

    #[test]
    fn stats_serialize_with_camel_case_and_nested_type_object() {
        let stats = compute_stats(&[record(
            ServiceType::Installation,
            ServiceStatus::Completed,
            50.0,
        )]);
        let json = serde_json::to_value(&stats).unwrap();

        assert_eq!(json["totalServices"], 1);
        assert_eq!(json["completedServices"], 1);
        assert_eq!(json["averageCost"], 50.0);
        assert_eq!(json["servicesByType"]["installation"], 1);
    }
}
