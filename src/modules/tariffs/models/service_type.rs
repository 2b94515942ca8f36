use serde::{Deserialize, Serialize};

/// Customer service class, which selects the tariff schedule
///
/// Parsing is total: any label that is not one of the known classes becomes
/// `Unclassified` and is billed with the default schedule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ServiceType {
    Residential,
    ResidentialLowIncome,
    SemiBusiness,
    Commercial,
    Admin,
    Industrial,
    MeterReadingPersonnel,
    /// Any other label, kept verbatim for echoing
    Unclassified(String),
}

impl ServiceType {
    /// Parses a service-class label. Matching is exact.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Residential" => ServiceType::Residential,
            "Residential Low-Income" => ServiceType::ResidentialLowIncome,
            "Semi-Business" => ServiceType::SemiBusiness,
            "Commercial" => ServiceType::Commercial,
            "Admin" => ServiceType::Admin,
            "Industrial" => ServiceType::Industrial,
            "Meter Reading Personnel" => ServiceType::MeterReadingPersonnel,
            other => ServiceType::Unclassified(other.to_string()),
        }
    }

    /// The label this service class is stored under
    pub fn label(&self) -> &str {
        match self {
            ServiceType::Residential => "Residential",
            ServiceType::ResidentialLowIncome => "Residential Low-Income",
            ServiceType::SemiBusiness => "Semi-Business",
            ServiceType::Commercial => "Commercial",
            ServiceType::Admin => "Admin",
            ServiceType::Industrial => "Industrial",
            ServiceType::MeterReadingPersonnel => "Meter Reading Personnel",
            ServiceType::Unclassified(label) => label,
        }
    }

    /// Derives the service class from an account-number prefix
    ///
    /// `RES-` Residential, `COM-` Commercial, `IND-` Industrial, `ADM-` Admin.
    /// Returns `None` for any other prefix.
    pub fn from_account_number(account_number: &str) -> Option<Self> {
        let (prefix, _) = account_number.trim().split_once('-')?;
        match prefix.to_ascii_uppercase().as_str() {
            "RES" => Some(ServiceType::Residential),
            "COM" => Some(ServiceType::Commercial),
            "IND" => Some(ServiceType::Industrial),
            "ADM" => Some(ServiceType::Admin),
            _ => None,
        }
    }

    /// Whether the sewerage surcharge applies to this class
    pub fn is_sewerage_chargeable(&self) -> bool {
        matches!(
            self,
            ServiceType::Commercial
                | ServiceType::Industrial
                | ServiceType::Admin
                | ServiceType::MeterReadingPersonnel
        )
    }
}

impl From<String> for ServiceType {
    fn from(label: String) -> Self {
        ServiceType::from_label(&label)
    }
}

impl From<&str> for ServiceType {
    fn from(label: &str) -> Self {
        ServiceType::from_label(label)
    }
}

impl From<ServiceType> for String {
    fn from(service_type: ServiceType) -> Self {
        service_type.label().to_string()
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
