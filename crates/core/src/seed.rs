//! Canonical seed fixtures for demos and fresh deployments.
//!
//! The seed endpoint replaces the whole collection with these six records.
//! Ids here use the short legacy numbering (`SRV001`…) rather than the
//! generated format; the store treats them like any other key.

use crate::record::{ServiceRecord, ServiceStatus, ServiceType};
use crate::types::Timestamp;

fn ts(value: &str) -> Timestamp {
    value.parse().expect("seed fixture timestamp is valid RFC 3339")
}

/// The canonical seed record set.
pub fn seed_records() -> Vec<ServiceRecord> {
    vec![
        ServiceRecord {
            id: "SRV001".to_string(),
            name: "Annual Generator Maintenance".to_string(),
            service_type: ServiceType::Maintenance,
            provider: "PowerTech Services".to_string(),
            cost: 2500.0,
            status: ServiceStatus::Scheduled,
            scheduled_date: "2024-03-01".to_string(),
            generator_id: Some("GEN001".to_string()),
            description: "Complete annual maintenance including oil change, filter replacement, and system diagnostics".to_string(),
            created_at: ts("2024-02-01T10:00:00.000Z"),
            updated_at: ts("2024-02-01T10:00:00.000Z"),
        },
        ServiceRecord {
            id: "SRV002".to_string(),
            name: "Emergency Repair Service".to_string(),
            service_type: ServiceType::Repair,
            provider: "QuickFix Solutions".to_string(),
            cost: 1200.0,
            status: ServiceStatus::InProgress,
            scheduled_date: "2024-02-18".to_string(),
            generator_id: Some("GEN002".to_string()),
            description: "Repair cooling system malfunction and replace damaged components".to_string(),
            created_at: ts("2024-02-10T14:30:00.000Z"),
            updated_at: ts("2024-02-18T09:15:00.000Z"),
        },
        ServiceRecord {
            id: "SRV003".to_string(),
            name: "Battery Bank Installation".to_string(),
            service_type: ServiceType::Installation,
            provider: "Energy Systems Inc".to_string(),
            cost: 15000.0,
            status: ServiceStatus::Completed,
            scheduled_date: "2024-01-15".to_string(),
            generator_id: None,
            description: "Installation of new lithium-ion battery bank with monitoring system".to_string(),
            created_at: ts("2024-01-05T08:00:00.000Z"),
            updated_at: ts("2024-01-20T16:30:00.000Z"),
        },
        ServiceRecord {
            id: "SRV004".to_string(),
            name: "Safety Inspection".to_string(),
            service_type: ServiceType::Inspection,
            provider: "SafeGuard Inspections".to_string(),
            cost: 800.0,
            status: ServiceStatus::Scheduled,
            scheduled_date: "2024-02-25".to_string(),
            generator_id: None,
            description: "Comprehensive safety inspection of all generator systems and compliance check".to_string(),
            created_at: ts("2024-02-15T11:45:00.000Z"),
            updated_at: ts("2024-02-15T11:45:00.000Z"),
        },
        ServiceRecord {
            id: "SRV005".to_string(),
            name: "Fuel System Cleaning".to_string(),
            service_type: ServiceType::Maintenance,
            provider: "PowerTech Services".to_string(),
            cost: 950.0,
            status: ServiceStatus::Completed,
            scheduled_date: "2024-01-20".to_string(),
            generator_id: Some("GEN003".to_string()),
            description: "Deep cleaning of fuel system, filters, and injection components".to_string(),
            created_at: ts("2024-01-10T13:20:00.000Z"),
            updated_at: ts("2024-01-22T15:00:00.000Z"),
        },
        ServiceRecord {
            id: "SRV006".to_string(),
            name: "Control Panel Upgrade".to_string(),
            service_type: ServiceType::Installation,
            provider: "TechUpgrade Solutions".to_string(),
            cost: 3500.0,
            status: ServiceStatus::Scheduled,
            scheduled_date: "2024-03-10".to_string(),
            generator_id: Some("GEN001".to_string()),
            description: "Upgrade to digital control panel with remote monitoring capabilities".to_string(),
            created_at: ts("2024-02-20T09:30:00.000Z"),
            updated_at: ts("2024-02-20T09:30:00.000Z"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_set_has_six_records_with_unique_ids() {
        let records = seed_records();
        assert_eq!(records.len(), 6);

        let ids: std::collections::HashSet<_> =
            records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn seed_timestamps_respect_the_updated_at_invariant() {
        for record in seed_records() {
            assert!(
                record.updated_at >= record.created_at,
                "{} violates updated_at >= created_at",
                record.id
            );
        }
    }
}
