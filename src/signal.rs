// Copyright 2025 Cowboy AI, LLC.

//! Infrastructure signals - normalized readings of the upstream status texts
//!
//! The authoritative data set reports energy, internet and Wi-Fi as free
//! text in the Portuguese census vocabulary ("Energia adequada", "Sem
//! internet", "Sem Wi-Fi"). This module interprets those texts ONCE, by
//! case-insensitive marker matching, into explicit signal enums so that the
//! classifier downstream operates only on enums and numbers. Interpretation
//! is deterministic and total: text outside the vocabulary falls to the
//! pessimistic reading for energy (a positive "adequada" match is required)
//! and to the marker-absence reading for internet and Wi-Fi.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Marker that reports adequate energy or internet service
const ADEQUATE_MARKER: &str = "adequada";
/// Marker that reports inadequate service; checked before the adequate marker
/// because the adequate marker is a substring of it
const INADEQUATE_MARKER: &str = "inadequada";
/// Marker that reports partial energy adequacy
const PARTIAL_MARKER: &str = "parcialmente";
/// Marker that reports no internet connection at all
const NO_INTERNET_MARKER: &str = "sem internet";
/// Markers that report no Wi-Fi network; both spelling variants occur upstream
const NO_WIFI_MARKERS: [&str; 2] = ["sem wi-fi", "sem wifi"];
/// Marker that reports adequate Wi-Fi (masculine agreement: "Wi-Fi adequado")
const WIFI_ADEQUATE_MARKER: &str = "adequado";
/// Marker that reports insufficient Wi-Fi coverage
const WIFI_INSUFFICIENT_MARKER: &str = "insuficiente";

/// Energy supply signal for one school
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum EnergySignal {
    /// Energy reported adequate
    Adequate,
    /// Energy reported partially adequate
    ///
    /// Treated as passing the energy gate: the upstream text contains the
    /// adequate marker and not the inadequate one, and the classification
    /// preserves that literal reading.
    PartiallyAdequate,
    /// Energy reported inadequate, or text outside the vocabulary
    Inadequate,
}

impl EnergySignal {
    /// Interpret an upstream energy status text
    pub fn interpret(text: &str) -> Self {
        let text = text.to_lowercase();
        if text.contains(INADEQUATE_MARKER) {
            EnergySignal::Inadequate
        } else if text.contains(PARTIAL_MARKER) && text.contains(ADEQUATE_MARKER) {
            EnergySignal::PartiallyAdequate
        } else if text.contains(ADEQUATE_MARKER) {
            EnergySignal::Adequate
        } else {
            EnergySignal::Inadequate
        }
    }

    /// Check if this signal passes the level-0 energy gate
    pub fn is_adequate(&self) -> bool {
        matches!(
            self,
            EnergySignal::Adequate | EnergySignal::PartiallyAdequate
        )
    }
}

/// Internet connection signal for one school
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum InternetSignal {
    /// Some internet connection is reported (any text without the absence marker)
    Connected,
    /// No internet connection at all
    Disconnected,
}

impl InternetSignal {
    /// Interpret an upstream internet status text
    pub fn interpret(text: &str) -> Self {
        if text.to_lowercase().contains(NO_INTERNET_MARKER) {
            InternetSignal::Disconnected
        } else {
            InternetSignal::Connected
        }
    }

    /// Check if any connection is present
    pub fn is_connected(&self) -> bool {
        matches!(self, InternetSignal::Connected)
    }
}

/// Wi-Fi network signal for one school
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum WifiSignal {
    /// A Wi-Fi network is reported (any text without an absence marker)
    Present,
    /// No Wi-Fi network
    Absent,
}

impl WifiSignal {
    /// Interpret an upstream Wi-Fi status text
    pub fn interpret(text: &str) -> Self {
        let text = text.to_lowercase();
        if NO_WIFI_MARKERS.iter().any(|marker| text.contains(marker)) {
            WifiSignal::Absent
        } else {
            WifiSignal::Present
        }
    }

    /// Check if a Wi-Fi network is present
    pub fn is_present(&self) -> bool {
        matches!(self, WifiSignal::Present)
    }
}

/// Check if an energy status text reports adequate energy
///
/// Tally rule used by the KPI aggregation; identical to the classification
/// gate for energy.
pub fn energy_text_is_adequate(text: &str) -> bool {
    let text = text.to_lowercase();
    text.contains(ADEQUATE_MARKER) && !text.contains(INADEQUATE_MARKER)
}

/// Check if an internet status text reports adequate service
///
/// Tally rule used by the KPI aggregation. Distinct from the classification
/// gate: classification only asks whether a connection exists, while the
/// tally asks whether the reported speed is adequate.
pub fn internet_text_is_adequate(text: &str) -> bool {
    let text = text.to_lowercase();
    text.contains(ADEQUATE_MARKER) && !text.contains(INADEQUATE_MARKER)
}

/// Check if a Wi-Fi status text reports adequate coverage
///
/// Tally rule used by the KPI aggregation ("Wi-Fi adequado" and not
/// "insuficiente"; partial coverage does not count as adequate).
pub fn wifi_text_is_adequate(text: &str) -> bool {
    let text = text.to_lowercase();
    text.contains(WIFI_ADEQUATE_MARKER) && !text.contains(WIFI_INSUFFICIENT_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test the energy vocabulary as reported upstream
    #[test]
    fn test_energy_vocabulary() {
        assert_eq!(
            EnergySignal::interpret("Energia adequada"),
            EnergySignal::Adequate
        );
        assert_eq!(
            EnergySignal::interpret("Energia inadequada"),
            EnergySignal::Inadequate
        );
        assert_eq!(
            EnergySignal::interpret("Energia parcialmente adequada"),
            EnergySignal::PartiallyAdequate
        );
    }

    /// Test that the inadequate marker wins even though it contains the
    /// adequate marker as a substring
    #[test]
    fn test_inadequate_marker_precedence() {
        let signal = EnergySignal::interpret("ENERGIA INADEQUADA");
        assert_eq!(signal, EnergySignal::Inadequate);
        assert!(!signal.is_adequate());
    }

    /// Test partial adequacy passes the energy gate (literal upstream behavior)
    #[test]
    fn test_partial_energy_passes_gate() {
        assert!(EnergySignal::interpret("Energia parcialmente adequada").is_adequate());
    }

    /// Test unrecognized energy text fails open to inadequate
    #[test]
    fn test_unrecognized_energy_is_inadequate() {
        assert_eq!(EnergySignal::interpret(""), EnergySignal::Inadequate);
        assert_eq!(
            EnergySignal::interpret("sem informação"),
            EnergySignal::Inadequate
        );
        assert_eq!(
            EnergySignal::interpret("Parcialmente funcional"),
            EnergySignal::Inadequate
        );
    }

    /// Test the internet vocabulary: only the absence marker disconnects
    #[test]
    fn test_internet_vocabulary() {
        assert!(InternetSignal::interpret("Velocidade adequada").is_connected());
        assert!(InternetSignal::interpret("Velocidade inadequada").is_connected());
        assert!(!InternetSignal::interpret("Sem internet").is_connected());
        assert!(!InternetSignal::interpret("SEM INTERNET").is_connected());
        // No absence marker, so a connection is assumed
        assert!(InternetSignal::interpret("").is_connected());
    }

    /// Test both Wi-Fi absence spellings are recognized
    #[test]
    fn test_wifi_absence_spellings() {
        assert!(!WifiSignal::interpret("Sem Wi-Fi").is_present());
        assert!(!WifiSignal::interpret("Sem WiFi").is_present());
        assert!(!WifiSignal::interpret("sem wifi").is_present());
    }

    /// Test degraded Wi-Fi still counts as present for classification
    #[test]
    fn test_degraded_wifi_is_present() {
        assert!(WifiSignal::interpret("Wi-Fi adequado").is_present());
        assert!(WifiSignal::interpret("Wi-Fi insuficiente").is_present());
        assert!(WifiSignal::interpret("Wi-Fi parcial").is_present());
    }

    /// Test the KPI tally rules over the full upstream vocabulary
    #[test]
    fn test_kpi_tally_rules() {
        assert!(energy_text_is_adequate("Energia adequada"));
        assert!(energy_text_is_adequate("Energia parcialmente adequada"));
        assert!(!energy_text_is_adequate("Energia inadequada"));

        assert!(internet_text_is_adequate("Velocidade adequada"));
        assert!(!internet_text_is_adequate("Velocidade inadequada"));
        assert!(!internet_text_is_adequate("Sem internet"));

        assert!(wifi_text_is_adequate("Wi-Fi adequado"));
        assert!(!wifi_text_is_adequate("Wi-Fi insuficiente"));
        assert!(!wifi_text_is_adequate("Wi-Fi parcial"));
        assert!(!wifi_text_is_adequate("Sem Wi-Fi"));
    }

    /// Test signal serde round-trips
    #[test]
    fn test_signal_serde() {
        let json = serde_json::to_string(&EnergySignal::PartiallyAdequate).expect("serialize");
        let back: EnergySignal = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, EnergySignal::PartiallyAdequate);

        let json = serde_json::to_string(&WifiSignal::Absent).expect("serialize");
        let back: WifiSignal = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, WifiSignal::Absent);
    }
}
