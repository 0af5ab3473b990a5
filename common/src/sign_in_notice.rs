//! Short codes the auth handlers put in the sign-in URL when a step fails.

use std::{fmt::Display, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInNotice {
    CodeNotSent,
    InvalidCode,
}

impl SignInNotice {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignInNotice::CodeNotSent => "code_not_sent",
            SignInNotice::InvalidCode => "invalid_code",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            SignInNotice::CodeNotSent => "We could not send a sign-in code to that email. Please try again.",
            SignInNotice::InvalidCode => "That code is not valid. Check your email and try again.",
        }
    }
}

impl Display for SignInNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SignInNotice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "code_not_sent" => Ok(SignInNotice::CodeNotSent),
            "invalid_code" => Ok(SignInNotice::InvalidCode),
            _ => Err(format!("unknown sign-in notice: {s}")),
        }
    }
}
