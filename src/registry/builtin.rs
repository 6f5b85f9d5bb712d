//! Feature table and capability lists baked in when this libcurl build was
//! configured.

use super::{DependencySpec, FeatureEntry, FeatureRegistry};
use crate::version::Version;

/// Protocols the library was built to speak.
pub const SUPPORTED_PROTOCOLS: &[&str] = &[
    "DICT", "FILE", "FTP", "FTPS", "GOPHER", "GOPHERS", "HTTP", "HTTPS", "IMAP", "IMAPS", "IPFS",
    "IPNS", "LDAP", "LDAPS", "MQTT", "POP3", "POP3S", "RTSP", "SMB", "SMBS", "SMTP", "SMTPS",
    "TELNET", "TFTP", "WS", "WSS",
];

/// Compile-time features the library was built with.
pub const SUPPORTED_FEATURES: &[&str] = &[
    "alt-svc",
    "AsynchDNS",
    "brotli",
    "HSTS",
    "HTTP2",
    "HTTPS-proxy",
    "IPv6",
    "Kerberos",
    "Largefile",
    "libz",
    "MultiSSL",
    "NTLM",
    "SPNEGO",
    "SSL",
    "SSPI",
    "threadsafe",
    "TLS-SRP",
    "Unicode",
    "UnixSockets",
];

/// Package namespace for imported targets.
pub const PACKAGE_NAME: &str = "CURL";

/// Library base name.
pub const LIBRARY_NAME: &str = "libcurl";

/// Version of the library build.
pub const PACKAGE_VERSION: Version = Version::new(8, 11, 0);

impl FeatureRegistry {
    /// The registry for this build.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            package: PACKAGE_NAME.to_string(),
            version: Some(PACKAGE_VERSION),
            library: LIBRARY_NAME.to_string(),
            features: builtin_features(),
        }
    }
}

fn openssl(name: &str) -> DependencySpec {
    DependencySpec::new(name).min_version("3").group("openssl")
}

fn builtin_features() -> Vec<FeatureEntry> {
    vec![
        FeatureEntry::new("USE_OPENSSL", true)
            .requires(openssl("libssl"))
            .requires(openssl("libcrypto")),
        FeatureEntry::new("HAVE_LIBZ", true)
            .requires(DependencySpec::new("zlib").min_version("1.2.0")),
        FeatureEntry::new("HAVE_BROTLI", true)
            .requires(DependencySpec::new("libbrotlidec").group("brotli"))
            .requires(DependencySpec::new("libbrotlicommon").group("brotli")),
        FeatureEntry::new("HAVE_ZSTD", false)
            .requires(DependencySpec::new("libzstd").min_version("1.0.0")),
        FeatureEntry::new("USE_NGHTTP2", true)
            .requires(DependencySpec::new("libnghttp2").min_version("1.15.0")),
        FeatureEntry::new("USE_NGTCP2", false)
            .requires(DependencySpec::new("libngtcp2").group("http3"))
            .requires(DependencySpec::new("libnghttp3").group("http3")),
        FeatureEntry::new("USE_QUICHE", false).requires(DependencySpec::new("quiche")),
        FeatureEntry::new("USE_LIBSSH2", false)
            .requires(DependencySpec::new("libssh2"))
            .requires(DependencySpec::new("zlib").min_version("1.2.0")),
        FeatureEntry::new("USE_LIBSSH", false).requires(DependencySpec::new("libssh")),
        FeatureEntry::new("USE_LIBPSL", false).requires(DependencySpec::new("libpsl")),
        FeatureEntry::new("USE_LIBIDN2", false).requires(DependencySpec::new("libidn2")),
        FeatureEntry::new("HAVE_GSSAPI", true)
            .requires(DependencySpec::new("krb5-gssapi").group("gss")),
        FeatureEntry::new("USE_MBEDTLS", false)
            .requires(DependencySpec::new("mbedtls").group("mbedtls"))
            .requires(DependencySpec::new("mbedcrypto").group("mbedtls")),
        FeatureEntry::new("USE_WOLFSSL", true).requires(DependencySpec::new("wolfssl")),
        FeatureEntry::new("USE_RUSTLS", false).requires(DependencySpec::new("rustls")),
        FeatureEntry::new("USE_ARES", false)
            .requires(DependencySpec::new("libcares").min_version("1.16.0")),
    ]
}
