//! Static consultation directory.

#[cfg(test)]
#[path = "doctors_test.rs"]
mod doctors_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Doctor {
    pub name: &'static str,
    pub specialty: &'static str,
    pub description: &'static str,
    pub phone: &'static str,
    pub fee_inr: u32,
}

impl Doctor {
    /// `tel:` link with the dashes stripped.
    #[must_use]
    pub fn tel_href(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| *c != '-').collect();
        format!("tel:{digits}")
    }
}

pub const DOCTORS: &[Doctor] = &[
    Doctor {
        name: "Dr. Siddharth Rao",
        specialty: "Pulmonology",
        description: "Chest & respiratory specialist",
        phone: "+91-9022000110",
        fee_inr: 400,
    },
    Doctor {
        name: "Dr. Leela Priya Kumar",
        specialty: "Radiology",
        description: "Senior X-ray/Imaging consultant",
        phone: "+91-9099700512",
        fee_inr: 350,
    },
    Doctor {
        name: "Dr. Rajat Agrawal",
        specialty: "General Physician",
        description: "Internal Medicine, Diagnosis",
        phone: "+91-8866800124",
        fee_inr: 300,
    },
    Doctor {
        name: "Dr. Reshma Suresh",
        specialty: "Cardiology",
        description: "Heart & chest expert",
        phone: "+91-9977700566",
        fee_inr: 700,
    },
];

/// Pick the featured fee from a uniform roll in `[0, 1)`. Out-of-range rolls
/// are clamped to the first and last entries.
#[must_use]
pub fn featured_fee(roll: f64) -> u32 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let idx = if roll.is_nan() || roll <= 0.0 {
        0
    } else {
        ((roll * DOCTORS.len() as f64) as usize).min(DOCTORS.len() - 1)
    };
    DOCTORS[idx].fee_inr
}

/// `₹400`.
#[must_use]
pub fn format_fee(fee_inr: u32) -> String {
    format!("\u{20b9}{fee_inr}")
}
