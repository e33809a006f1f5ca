use serde::{Deserialize, Serialize};

/// A raw lead submission as posted by the web form. Every field is a plain
/// string; absent fields deserialize to empty, which scores the same as an
/// unrecognized value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadSubmission {
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub company_size: String,
    pub budget: String,
    pub timeline: String,
    pub needs: String,
    pub current_solution: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Budget {
    Over100k,
    From50kTo100k,
    From15kTo50k,
    From5kTo15k,
    Under5k,
    Unspecified,
}

impl Budget {
    /// Total mapping: anything the form didn't produce falls back to
    /// `Unspecified`, which contributes nothing to the score.
    pub fn from_str(s: &str) -> Self {
        match s {
            "100k+" => Budget::Over100k,
            "50k-100k" => Budget::From50kTo100k,
            "15k-50k" => Budget::From15kTo50k,
            "5k-15k" => Budget::From5kTo15k,
            "<5k" => Budget::Under5k,
            _ => Budget::Unspecified,
        }
    }

    pub fn score_delta(&self) -> i32 {
        match self {
            Budget::Over100k => 25,
            Budget::From50kTo100k => 20,
            Budget::From15kTo50k => 15,
            Budget::From5kTo15k => 10,
            Budget::Under5k => 5,
            Budget::Unspecified => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Timeline {
    Immediate,
    OneMonth,
    ThreeMonths,
    SixMonths,
    Exploring,
    Unspecified,
}

impl Timeline {
    pub fn from_str(s: &str) -> Self {
        match s {
            "immediate" => Timeline::Immediate,
            "1month" => Timeline::OneMonth,
            "3months" => Timeline::ThreeMonths,
            "6months" => Timeline::SixMonths,
            "exploring" => Timeline::Exploring,
            _ => Timeline::Unspecified,
        }
    }

    pub fn score_delta(&self) -> i32 {
        match self {
            Timeline::Immediate => 20,
            Timeline::OneMonth => 15,
            Timeline::ThreeMonths => 10,
            Timeline::SixMonths => 5,
            Timeline::Exploring => -5,
            Timeline::Unspecified => 0,
        }
    }

    /// Recommended response-time label. Depends on the stated timeline only,
    /// never on the score.
    pub fn urgency(&self) -> &'static str {
        match self {
            Timeline::Immediate => "Critical - Contact within 2 hours",
            Timeline::OneMonth => "High - Contact within 24 hours",
            Timeline::ThreeMonths => "Medium - Contact within 3 days",
            _ => "Low - Add to nurture sequence",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CompanySize {
    Over500,
    From201To500,
    From51To200,
    From11To50,
    From1To10,
    Unspecified,
}

impl CompanySize {
    pub fn from_str(s: &str) -> Self {
        match s {
            "500+" => CompanySize::Over500,
            "201-500" => CompanySize::From201To500,
            "51-200" => CompanySize::From51To200,
            "11-50" => CompanySize::From11To50,
            "1-10" => CompanySize::From1To10,
            _ => CompanySize::Unspecified,
        }
    }

    pub fn score_delta(&self) -> i32 {
        match self {
            CompanySize::Over500 => 15,
            CompanySize::From201To500 => 12,
            CompanySize::From51To200 => 10,
            CompanySize::From11To50 => 7,
            CompanySize::From1To10 => 5,
            CompanySize::Unspecified => 0,
        }
    }
}
