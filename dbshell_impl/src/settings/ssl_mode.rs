/// The TLS negotiation mode of a connection, as given with the option `sslmode`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SslMode {
    /// No TLS at all.
    Disable,
    /// Try a plain connection first, TLS if that fails.
    Allow,
    /// Try TLS first, a plain connection if that fails.
    Prefer,
    /// TLS, without verifying the server.
    Require,
    /// TLS, the server certificate must be signed by a trusted CA.
    VerifyCa,
    /// TLS, like `VerifyCa`, and the server host name must match its certificate.
    VerifyFull,
    /// A value that is not known here; it is handed over to the shell unchanged.
    Other(String),
}

impl SslMode {
    /// Interprets the value of the option `sslmode`; an empty value means that no mode is given.
    pub fn from_option_value(value: &str) -> Option<Self> {
        Some(match value {
            "" => return None,
            "disable" => Self::Disable,
            "allow" => Self::Allow,
            "prefer" => Self::Prefer,
            "require" => Self::Require,
            "verify-ca" => Self::VerifyCa,
            "verify-full" => Self::VerifyFull,
            other => {
                warn!("unrecognized sslmode '{other}' is passed on as is");
                Self::Other(other.to_string())
            }
        })
    }

    /// The value as it is written into the connection URL.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Disable => "disable",
            Self::Allow => "allow",
            Self::Prefer => "prefer",
            Self::Require => "require",
            Self::VerifyCa => "verify-ca",
            Self::VerifyFull => "verify-full",
            Self::Other(s) => s,
        }
    }

    /// Whether TLS is switched off.
    pub fn is_disable(&self) -> bool {
        matches!(self, Self::Disable)
    }
}

impl std::fmt::Display for SslMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
