// Property-based tests for the progressive tariff schedules
//
// - basic charge never decreases as consumption grows
// - it strictly increases inside any band with a positive rate
// - it is continuous at every tier boundary (only the slope changes)
// - zero consumption costs exactly the first tier's fixed component

use hydrobill::tariffs::{ServiceType, TariffSchedule};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn schedules() -> impl Strategy<Value = TariffSchedule> {
    prop::sample::select(TariffSchedule::all().to_vec())
}

/// Consumption in thousandths of a m³, 0 to 400 m³
fn consumption() -> impl Strategy<Value = Decimal> {
    (0i64..400_000).prop_map(|milli| Decimal::new(milli, 3))
}

proptest! {
    #[test]
    fn test_basic_charge_is_monotonic(
        schedule in schedules(),
        a in consumption(),
        b in consumption(),
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            schedule.basic_charge(low) <= schedule.basic_charge(high),
            "{}: charge({}) > charge({})", schedule.name, low, high
        );
    }

    #[test]
    fn test_basic_charge_strictly_increases_inside_priced_bands(
        schedule in schedules(),
        a in consumption(),
        step in 1i64..1_000,
    ) {
        let b = a + Decimal::new(step, 3);

        // Find the band that contains both points, if any
        let mut lower = Decimal::ZERO;
        for tier in schedule.tiers {
            let upper = tier.upper_bound();
            let inside = a >= lower && upper.map_or(true, |u| b <= u);
            if inside && tier.marginal_rate() > Decimal::ZERO {
                prop_assert!(
                    schedule.basic_charge(a) < schedule.basic_charge(b),
                    "{}: charge not increasing between {} and {}", schedule.name, a, b
                );
            }
            match upper {
                Some(u) => lower = u,
                None => break,
            }
        }
    }
}

#[test]
fn test_continuity_at_every_boundary() {
    let epsilon = dec!(0.000001);

    for schedule in TariffSchedule::all() {
        for boundary in schedule.boundaries() {
            let at = schedule.basic_charge(boundary);
            let just_below = schedule.basic_charge(boundary - epsilon);
            let just_above = schedule.basic_charge(boundary + epsilon);

            // Largest marginal rate is 82.67, so the jump over epsilon is tiny
            let tolerance = dec!(0.0001);
            assert!(
                (at - just_below).abs() < tolerance && (just_above - at).abs() < tolerance,
                "{} jumps at {}: {} / {} / {}",
                schedule.name,
                boundary,
                just_below,
                at,
                just_above
            );
        }
    }
}

#[test]
fn test_top_of_lower_tier_equals_bottom_of_upper_tier() {
    // Summing completed bands by hand must give the same value as evaluating
    // the schedule exactly at the boundary
    for schedule in TariffSchedule::all() {
        let mut lower = Decimal::ZERO;
        let mut running = Decimal::ZERO;

        for tier in schedule.tiers {
            let Some(upper) = tier.upper_bound() else { break };
            running += tier.fixed_charge() + tier.marginal_rate() * (upper - lower);
            assert_eq!(
                schedule.basic_charge(upper),
                running,
                "{} at {}",
                schedule.name,
                upper
            );
            lower = upper;
        }
    }
}

#[test]
fn test_zero_consumption_is_fixed_component() {
    let cases = [
        (ServiceType::Residential, dec!(195.49)),
        (ServiceType::ResidentialLowIncome, dec!(70.07)),
        (ServiceType::SemiBusiness, dec!(195.49)),
        (ServiceType::Commercial, dec!(512.30)),
        (ServiceType::Admin, dec!(512.30)),
        (ServiceType::Industrial, Decimal::ZERO),
        (ServiceType::MeterReadingPersonnel, Decimal::ZERO),
        (ServiceType::Unclassified("Church".into()), dec!(195.49)),
    ];

    for (service_type, expected) in cases {
        assert_eq!(
            TariffSchedule::for_service(&service_type).basic_charge(Decimal::ZERO),
            expected,
            "{}",
            service_type
        );
    }
}

#[test]
fn test_schedule_selection() {
    assert_eq!(
        TariffSchedule::for_service(&ServiceType::Admin),
        TariffSchedule::COMMERCIAL
    );
    assert_eq!(
        TariffSchedule::for_service(&ServiceType::MeterReadingPersonnel),
        TariffSchedule::INDUSTRIAL
    );
    assert_eq!(
        TariffSchedule::for_service(&ServiceType::from_label("residential")),
        TariffSchedule::DEFAULT
    );
}

#[test]
fn test_default_schedule_undercharges_above_twenty() {
    let consumption = dec!(35);
    let default = TariffSchedule::DEFAULT.basic_charge(consumption);
    let residential = TariffSchedule::RESIDENTIAL.basic_charge(consumption);

    // 195.49 + 25 * 23.82
    assert_eq!(default, dec!(790.99));
    assert!(default < residential);

    // Identical up to 20 m³
    assert_eq!(
        TariffSchedule::DEFAULT.basic_charge(dec!(20)),
        TariffSchedule::RESIDENTIAL.basic_charge(dec!(20))
    );
}
