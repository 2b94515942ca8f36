//! Tier tables for every service class
//!
//! Each schedule is an ordered list of tiers evaluated by one progressive
//! routine. A tier's lower bound is the previous tier's upper bound (0 for
//! the first tier). Amounts are stored in cents and bounds in whole cubic
//! meters so the tables stay `const`.

use rust_decimal::Decimal;

use crate::modules::tariffs::models::ServiceType;

/// One band of a progressive tariff schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    /// Cumulative upper bound in m³; `None` means open-ended
    pub upper_bound: Option<i64>,
    /// Charge per m³ consumed inside this band, in cents
    pub marginal_rate_cents: i64,
    /// Charge applied once the band is entered, in cents
    pub fixed_charge_cents: i64,
}

impl Tier {
    /// Minimum charge covering everything up to `upper_bound`
    const fn flat(upper_bound: i64, fixed_charge_cents: i64) -> Self {
        Self {
            upper_bound: Some(upper_bound),
            marginal_rate_cents: 0,
            fixed_charge_cents,
        }
    }

    const fn band(upper_bound: i64, marginal_rate_cents: i64) -> Self {
        Self {
            upper_bound: Some(upper_bound),
            marginal_rate_cents,
            fixed_charge_cents: 0,
        }
    }

    const fn open(marginal_rate_cents: i64) -> Self {
        Self {
            upper_bound: None,
            marginal_rate_cents,
            fixed_charge_cents: 0,
        }
    }

    pub fn upper_bound(&self) -> Option<Decimal> {
        self.upper_bound.map(Decimal::from)
    }

    pub fn marginal_rate(&self) -> Decimal {
        Decimal::new(self.marginal_rate_cents, 2)
    }

    pub fn fixed_charge(&self) -> Decimal {
        Decimal::new(self.fixed_charge_cents, 2)
    }
}

/// Progressive tariff schedule for one or more service classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TariffSchedule {
    pub name: &'static str,
    pub tiers: &'static [Tier],
}

impl TariffSchedule {
    pub const RESIDENTIAL_LOW_INCOME: TariffSchedule = TariffSchedule {
        name: "Residential Low-Income",
        tiers: &[
            Tier::flat(10, 7007),
            Tier::band(20, 1429),
            Tier::band(30, 2382),
            Tier::band(40, 4517),
            Tier::open(5954),
        ],
    };

    pub const RESIDENTIAL: TariffSchedule = TariffSchedule {
        name: "Residential",
        tiers: &[
            Tier::flat(10, 19549),
            Tier::band(20, 2382),
            Tier::band(30, 4517),
            Tier::band(50, 5954),
            Tier::band(70, 6952),
            Tier::band(90, 7289),
            Tier::band(140, 7614),
            Tier::band(200, 7942),
            Tier::open(8267),
        ],
    };

    pub const SEMI_BUSINESS: TariffSchedule = TariffSchedule {
        name: "Semi-Business",
        tiers: &[
            Tier::flat(10, 19549),
            Tier::band(30, 3990),
            Tier::band(50, 4922),
            Tier::band(70, 6255),
            Tier::band(120, 7288),
            Tier::band(170, 7614),
            Tier::band(200, 7942),
            Tier::open(8267),
        ],
    };

    /// Commercial and Admin accounts
    pub const COMMERCIAL: TariffSchedule = TariffSchedule {
        name: "Commercial",
        tiers: &[
            Tier::flat(10, 51230),
            Tier::band(20, 5361),
            Tier::band(40, 5898),
            Tier::band(60, 6433),
            Tier::band(80, 6969),
            Tier::band(100, 7288),
            Tier::band(150, 7614),
            Tier::band(200, 7942),
            Tier::open(8267),
        ],
    };

    /// Industrial and Meter Reading Personnel accounts: one rate, no minimum
    pub const INDUSTRIAL: TariffSchedule = TariffSchedule {
        name: "Industrial",
        tiers: &[Tier::open(7268)],
    };

    /// Fallback for unclassified accounts. Only the first two residential
    /// tiers; consumption above 20 m³ stays at 23.82.
    pub const DEFAULT: TariffSchedule = TariffSchedule {
        name: "Default",
        tiers: &[Tier::flat(10, 19549), Tier::open(2382)],
    };

    pub fn for_service(service_type: &ServiceType) -> Self {
        match service_type {
            ServiceType::ResidentialLowIncome => Self::RESIDENTIAL_LOW_INCOME,
            ServiceType::Residential => Self::RESIDENTIAL,
            ServiceType::SemiBusiness => Self::SEMI_BUSINESS,
            ServiceType::Commercial | ServiceType::Admin => Self::COMMERCIAL,
            ServiceType::Industrial | ServiceType::MeterReadingPersonnel => Self::INDUSTRIAL,
            ServiceType::Unclassified(_) => Self::DEFAULT,
        }
    }

    /// Every schedule, for table-wide checks
    pub fn all() -> [TariffSchedule; 6] {
        [
            Self::RESIDENTIAL_LOW_INCOME,
            Self::RESIDENTIAL,
            Self::SEMI_BUSINESS,
            Self::COMMERCIAL,
            Self::INDUSTRIAL,
            Self::DEFAULT,
        ]
    }

    /// Finite tier boundaries in ascending order
    pub fn boundaries(&self) -> Vec<Decimal> {
        self.tiers.iter().filter_map(Tier::upper_bound).collect()
    }

    /// Basic charge for `consumption` m³
    ///
    /// The first tier always applies, so its fixed charge is the minimum
    /// charge. Later tiers apply only once consumption exceeds their lower
    /// bound, and each contributes its own band at its own marginal rate.
    pub fn basic_charge(&self, consumption: Decimal) -> Decimal {
        let mut charge = Decimal::ZERO;
        let mut lower = Decimal::ZERO;

        for (index, tier) in self.tiers.iter().enumerate() {
            if index > 0 && consumption <= lower {
                break;
            }

            let upper = tier.upper_bound();
            let top = match upper {
                Some(upper) => consumption.min(upper),
                None => consumption,
            };
            let volume = (top - lower).max(Decimal::ZERO);

            charge += tier.fixed_charge() + tier.marginal_rate() * volume;

            match upper {
                Some(upper) => lower = upper,
                None => break,
            }
        }

        charge
    }
}
