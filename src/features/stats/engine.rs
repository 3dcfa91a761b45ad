use crate::features::cleaners::models::CleanerProfile;
use crate::features::cleanings::models::Cleaning;
use crate::features::machines::models::Machine;
use crate::features::stats::models::{CleanerStats, MachineStats};
use crate::DEFAULT_PAYMENT_RATE;

/// Whether a cleaning belongs to a machine
///
/// Records carrying a machine id match by id alone; only legacy records
/// without one fall back to the exact display-name match. A record can
/// therefore never be counted for two machines, and one matching nothing
/// belongs to no machine at all.
fn belongs_to(cleaning: &Cleaning, machine: &Machine) -> bool {
    match &cleaning.machine_id {
        Some(machine_id) => machine_id == &machine.id,
        None => cleaning.machine == machine.name,
    }
}

/// Most recent timestamp in a partition
///
/// Compared as parsed instants; records with unparseable timestamps sort
/// before every valid one.
fn latest_timestamp(cleanings: &[&Cleaning]) -> Option<String> {
    cleanings
        .iter()
        .max_by_key(|cleaning| cleaning.parsed_timestamp())
        .map(|cleaning| cleaning.timestamp.clone())
}

/// Compute per-machine statistics
///
/// # Arguments
/// * `machines` - machines to report on
/// * `cleanings` - the full cleaning log
pub fn compute_machine_stats(machines: &[Machine], cleanings: &[Cleaning]) -> Vec<MachineStats> {
    machines
        .iter()
        .map(|machine| {
            let partition: Vec<&Cleaning> = cleanings
                .iter()
                .filter(|cleaning| belongs_to(cleaning, machine))
                .collect();

            let total_earnings: f64 = partition
                .iter()
                .map(|cleaning| cleaning.payment_rate.unwrap_or(DEFAULT_PAYMENT_RATE))
                .sum();

            let mut assigned_cleaners: Vec<String> = Vec::new();
            for cleaning in &partition {
                if !assigned_cleaners.contains(&cleaning.cleaner_id) {
                    assigned_cleaners.push(cleaning.cleaner_id.clone());
                }
            }

            MachineStats {
                machine_id: machine.id.clone(),
                machine_name: machine.name.clone(),
                total_cleanings: partition.len(),
                total_earnings,
                last_cleaning: latest_timestamp(&partition),
                assigned_cleaners,
            }
        })
        .collect()
}

/// Compute statistics for one cleaner
///
/// Earnings resolve each record's own rate, then the profile rate, then
/// the global default. The reported machine is the cleaner's current
/// assignment; a dangling assignment degrades to "Unknown Machine".
///
/// # Arguments
/// * `cleaner` - the cleaner's profile
/// * `cleanings` - the full cleaning log (filtered here by cleaner id)
/// * `machines` - machines for the assignment lookup
pub fn compute_cleaner_stats(
    cleaner: &CleanerProfile,
    cleanings: &[Cleaning],
    machines: &[Machine],
) -> CleanerStats {
    let own: Vec<&Cleaning> = cleanings
        .iter()
        .filter(|cleaning| cleaning.cleaner_id == cleaner.uid)
        .collect();

    let total_earnings: f64 = own
        .iter()
        .map(|cleaning| {
            cleaning
                .payment_rate
                .or(cleaner.payment_rate)
                .unwrap_or(DEFAULT_PAYMENT_RATE)
        })
        .sum();

    let machine_name = match &cleaner.assigned_machine_id {
        Some(machine_id) => machines
            .iter()
            .find(|machine| &machine.id == machine_id)
            .map(|machine| machine.name.clone())
            .unwrap_or_else(|| "Unknown Machine".to_string()),
        None => "No Machine Assigned".to_string(),
    };

    CleanerStats {
        cleaner_id: cleaner.uid.clone(),
        cleaner_name: cleaner.name.clone(),
        machine_id: cleaner.assigned_machine_id.clone(),
        machine_name,
        total_cleanings: own.len(),
        total_earnings,
        payment_rate: cleaner.payment_rate.unwrap_or(DEFAULT_PAYMENT_RATE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::models::Role;

    fn machine(id: &str, name: &str) -> Machine {
        Machine {
            id: id.to_string(),
            name: name.to_string(),
            location: "loc".to_string(),
            city: "Uppsala".to_string(),
            is_active: true,
            created_at: "2024-01-01T00:00:00+01:00".to_string(),
            created_by: "admin-uid".to_string(),
        }
    }

    fn cleaning(
        id: &str,
        cleaner_id: &str,
        machine_id: Option<&str>,
        legacy_name: &str,
        rate: Option<f64>,
        timestamp: &str,
    ) -> Cleaning {
        Cleaning {
            id: id.to_string(),
            cleaner_id: cleaner_id.to_string(),
            cleaner_name: "Anna".to_string(),
            machine: legacy_name.to_string(),
            machine_id: machine_id.map(str::to_string),
            machine_name: None,
            payment_rate: rate,
            timestamp: timestamp.to_string(),
        }
    }

    fn cleaner(uid: &str, machine_id: Option<&str>, rate: Option<f64>) -> CleanerProfile {
        CleanerProfile {
            uid: uid.to_string(),
            name: "Anna".to_string(),
            email: "anna@example.se".to_string(),
            role: Role::Cleaner,
            is_active: true,
            created_at: "2024-01-01T00:00:00+01:00".to_string(),
            created_by: None,
            assigned_machine_id: machine_id.map(str::to_string),
            payment_rate: rate,
        }
    }

    #[test]
    fn test_machine_stats_partitioning() {
        let machines = vec![machine("m-1", "Uppsala #1"), machine("m-2", "Stockholm #1")];
        let cleanings = vec![
            cleaning("c-1", "uid-1", Some("m-1"), "x", Some(100.0), "2024-01-10T08:00:00+01:00"),
            cleaning("c-2", "uid-2", Some("m-1"), "x", None, "2024-02-10T08:00:00+01:00"),
            // Legacy record, matched by display name
            cleaning("c-3", "uid-1", None, "Stockholm #1", Some(80.0), "2024-01-05T08:00:00+01:00"),
        ];

        let stats = compute_machine_stats(&machines, &cleanings);

        assert_eq!(stats[0].total_cleanings, 2);
        assert_eq!(stats[0].total_earnings, 200.0); // 100 + default 100
        assert_eq!(stats[0].assigned_cleaners, vec!["uid-1", "uid-2"]);
        assert_eq!(
            stats[0].last_cleaning.as_deref(),
            Some("2024-02-10T08:00:00+01:00")
        );

        assert_eq!(stats[1].total_cleanings, 1);
        assert_eq!(stats[1].total_earnings, 80.0);
    }

    #[test]
    fn test_no_double_counting_across_machines() {
        // Record carries the id of one machine and the legacy name of another;
        // the id wins and the record counts exactly once
        let machines = vec![machine("m-1", "Uppsala #1"), machine("m-2", "Stockholm #1")];
        let cleanings = vec![cleaning(
            "c-1",
            "uid-1",
            Some("m-1"),
            "Stockholm #1",
            Some(100.0),
            "2024-01-10T08:00:00+01:00",
        )];

        let stats = compute_machine_stats(&machines, &cleanings);
        let total: usize = stats.iter().map(|s| s.total_cleanings).sum();
        assert_eq!(total, 1);
        assert_eq!(stats[0].total_cleanings, 1);
        assert_eq!(stats[1].total_cleanings, 0);
    }

    #[test]
    fn test_orphan_cleaning_belongs_to_no_machine() {
        let machines = vec![machine("m-1", "Uppsala #1")];
        let cleanings = vec![
            cleaning("c-1", "uid-1", Some("ghost"), "Nowhere", Some(100.0), "2024-01-10T08:00:00+01:00"),
            cleaning("c-2", "uid-1", None, "Nowhere", Some(100.0), "2024-01-11T08:00:00+01:00"),
        ];

        let stats = compute_machine_stats(&machines, &cleanings);
        assert_eq!(stats[0].total_cleanings, 0);
        assert!(stats[0].last_cleaning.is_none());
        assert!(stats[0].assigned_cleaners.is_empty());
    }

    #[test]
    fn test_cleaner_stats_rate_fallback_chain() {
        let machines = vec![machine("m-1", "Uppsala #1")];
        let profile = cleaner("uid-1", Some("m-1"), Some(90.0));
        let cleanings = vec![
            cleaning("c-1", "uid-1", Some("m-1"), "x", Some(120.0), "2024-01-10T08:00:00+01:00"),
            cleaning("c-2", "uid-1", Some("m-1"), "x", None, "2024-01-11T08:00:00+01:00"),
            // Another cleaner's record is ignored
            cleaning("c-3", "uid-2", Some("m-1"), "x", Some(500.0), "2024-01-12T08:00:00+01:00"),
        ];

        let stats = compute_cleaner_stats(&profile, &cleanings, &machines);
        assert_eq!(stats.total_cleanings, 2);
        assert_eq!(stats.total_earnings, 210.0); // 120 + profile 90
        assert_eq!(stats.machine_name, "Uppsala #1");
        assert_eq!(stats.payment_rate, 90.0);
    }

    #[test]
    fn test_cleaner_stats_reports_current_assignment() {
        // All cleanings were done on m-1, but the cleaner has since been
        // moved to m-2; the stats report m-2
        let machines = vec![machine("m-1", "Uppsala #1"), machine("m-2", "Stockholm #1")];
        let profile = cleaner("uid-1", Some("m-2"), None);
        let cleanings = vec![cleaning(
            "c-1",
            "uid-1",
            Some("m-1"),
            "x",
            Some(100.0),
            "2024-01-10T08:00:00+01:00",
        )];

        let stats = compute_cleaner_stats(&profile, &cleanings, &machines);
        assert_eq!(stats.machine_id.as_deref(), Some("m-2"));
        assert_eq!(stats.machine_name, "Stockholm #1");
    }

    #[test]
    fn test_cleaner_stats_assignment_edge_cases() {
        let machines = vec![machine("m-1", "Uppsala #1")];

        let unassigned = compute_cleaner_stats(&cleaner("uid-1", None, None), &[], &machines);
        assert_eq!(unassigned.machine_name, "No Machine Assigned");
        assert_eq!(unassigned.payment_rate, DEFAULT_PAYMENT_RATE);

        let dangling = compute_cleaner_stats(&cleaner("uid-1", Some("ghost"), None), &[], &machines);
        assert_eq!(dangling.machine_name, "Unknown Machine");
    }
}
