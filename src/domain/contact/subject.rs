use std::fmt;

/// The closed set of topics a contact form can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Donation,
    Volunteer,
    Partnership,
    General,
}

impl Subject {
    pub const ALL: [Subject; 4] = [
        Subject::Donation,
        Subject::Volunteer,
        Subject::Partnership,
        Subject::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Donation => "donation",
            Subject::Volunteer => "volunteer",
            Subject::Partnership => "partnership",
            Subject::General => "general",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Subject {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|subject| subject.as_str() == value)
            .ok_or_else(|| {
                "must be one of: donation, volunteer, partnership, general".to_string()
            })
    }
}
