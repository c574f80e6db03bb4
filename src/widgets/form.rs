//! Contact-form validator and stubbed submission
//!
//! Field rules mirror the page's patterns:
//! - name: Latin or Cyrillic letters and spaces, at least 2 characters
//! - email: `local@domain.tld` shape, no whitespace or extra `@`
//! - phone: digits, spaces, dashes, plus and parentheses, at least 10 chars
//!
//! Submission never touches the network: it is a timed state machine that
//! spends 1.5 s "sending", shows success for 3 s, then returns to idle

/// Outcome of validating a single field.
pub type FieldResult = Result<(), &'static str>;

fn is_name_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
        || ('а'..='я').contains(&c)
        || ('А'..='Я').contains(&c)
        || c == 'ё'
        || c == 'Ё'
}

pub fn validate_name(value: &str) -> FieldResult {
    let value = value.trim();
    let ok = value.chars().count() >= 2
        && value.chars().all(|c| is_name_letter(c) || c.is_whitespace());
    if ok {
        Ok(())
    } else {
        Err("Минимум 2 буквы")
    }
}

pub fn validate_email(value: &str) -> FieldResult {
    let value = value.trim();
    let valid = || {
        let (local, domain) = value.split_once('@')?;
        let bad = |s: &str| s.is_empty() || s.contains(|c: char| c.is_whitespace() || c == '@');
        if bad(local) {
            return None;
        }
        // domain needs a dot with non-empty pieces on both sides
        let (host, tld) = domain.rsplit_once('.')?;
        if bad(host) || bad(tld) {
            return None;
        }
        Some(())
    };
    match valid() {
        Some(()) => Ok(()),
        None => Err("Некорректный email"),
    }
}

pub fn validate_phone(value: &str) -> FieldResult {
    let value = value.trim();
    let ok = value.chars().count() >= 10
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '+' | '(' | ')'));
    if ok {
        Ok(())
    } else {
        Err("Некорректный телефон")
    }
}

/// How long the stubbed submission pretends to send, in milliseconds.
pub const SENDING_MS: u64 = 1500;
/// How long the success state stays up before the button resets.
pub const SENT_MS: u64 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitState {
    Idle,
    Sending { remaining_ms: u64 },
    Sent { remaining_ms: u64 },
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub agreement: bool, // data-processing consent checkbox
    state: SubmitState,
}

impl Default for SubmitState {
    fn default() -> Self {
        SubmitState::Idle
    }
}

impl ContactForm {
    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    /// Validate every field; the first error per field is reported.
    pub fn validate(&self) -> Vec<FieldResult> {
        vec![
            validate_name(&self.name),
            validate_email(&self.email),
            validate_phone(&self.phone),
        ]
    }

    /// Submit attempt. Starts the stubbed send only when every field
    /// validates and the agreement box is checked; returns whether the
    /// submission was accepted.
    pub fn submit(&mut self) -> bool {
        if self.state != SubmitState::Idle {
            return false;
        }
        let all_valid = self.validate().iter().all(|r| r.is_ok());
        if !all_valid || !self.agreement {
            return false;
        }
        self.state = SubmitState::Sending { remaining_ms: SENDING_MS };
        true
    }

    /// Advance the submission clock. Sending completes into the success
    /// state and clears the form; success expires back to idle.
    pub fn advance(&mut self, ms: u64) {
        match &mut self.state {
            SubmitState::Idle => {}
            SubmitState::Sending { remaining_ms } => {
                if *remaining_ms > ms {
                    *remaining_ms -= ms;
                } else {
                    let leftover = ms - *remaining_ms;
                    self.name.clear();
                    self.email.clear();
                    self.phone.clear();
                    self.agreement = false;
                    self.state = SubmitState::Sent { remaining_ms: SENT_MS };
                    // spill any leftover time into the success countdown
                    self.advance(leftover);
                }
            }
            SubmitState::Sent { remaining_ms } => {
                if *remaining_ms > ms {
                    *remaining_ms -= ms;
                } else {
                    self.state = SubmitState::Idle;
                }
            }
        }
    }
}
