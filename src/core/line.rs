//! Settings line emission.

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants::SETTING_NAME;
use crate::core::provider::SecretProvider;
use crate::core::secret::SecretKey;
use crate::error::Result;

/// Wrap a key in the settings template: `SECRET_KEY = '<key>'`.
///
/// The line holds the key verbatim, so it is wiped on drop like the key.
pub fn format_line(key: &SecretKey) -> Zeroizing<String> {
    let mut line = Zeroizing::new(String::with_capacity(
        SETTING_NAME.len() + " = ''".len() + key.len(),
    ));
    line.push_str(SETTING_NAME);
    line.push_str(" = '");
    line.push_str(key.as_str());
    line.push('\'');
    line
}

/// Generate a key with `provider` and format it as a settings line.
///
/// Provider failures propagate unchanged; there is no retry.
pub fn emit_secret_key_line<P: SecretProvider + ?Sized>(
    provider: &P,
) -> Result<Zeroizing<String>> {
    let key = provider.generate()?;
    debug!(length = key.len(), "formatting settings line");
    Ok(format_line(&key))
}
