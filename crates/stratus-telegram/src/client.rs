use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use grammers_client::{Client, Config, SignInError};
use grammers_session::Session;
use grammers_tl_types as tl;

use stratus_emoji::EmojiStatus;

/// Connection settings for the Telegram session.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub api_id: i32,
    pub api_hash: String,
    pub session_file: PathBuf,
}

/// Telegram client owning the authenticated session that receives emoji
/// status updates.
pub struct StatusClient {
    client: Client,
    session_file: PathBuf,
}

impl StatusClient {
    /// Connect to Telegram and ensure the session is authorized.
    ///
    /// The first run prompts for the phone number, login code and, when the
    /// account has one, the two-factor password on the terminal. The saved
    /// session file makes subsequent runs non-interactive.
    pub async fn connect(settings: SessionSettings) -> Result<Self> {
        let session = Session::load_file_or_create(&settings.session_file)
            .context("Failed to load Telegram session file")?;

        let client = Client::connect(Config {
            session,
            api_id: settings.api_id,
            api_hash: settings.api_hash.clone(),
            params: Default::default(),
        })
        .await
        .context("Failed to connect to Telegram")?;

        let status_client = Self {
            client,
            session_file: settings.session_file,
        };

        if !status_client.client.is_authorized().await? {
            status_client.sign_in().await?;
        }

        tracing::info!("Connected to Telegram");
        Ok(status_client)
    }

    async fn sign_in(&self) -> Result<()> {
        let phone = prompt("Phone number (international format): ")?;
        let token = self
            .client
            .request_login_code(&phone)
            .await
            .context("Failed to request login code")?;

        let code = prompt("Login code: ")?;
        match self.client.sign_in(&token, &code).await {
            Ok(_) => {}
            Err(SignInError::PasswordRequired(password_token)) => {
                let hint = password_token.hint().unwrap_or("none");
                let password = prompt(&format!("Password (hint: {hint}): "))?;
                self.client
                    .check_password(password_token, password.trim())
                    .await
                    .context("Two-factor password rejected")?;
            }
            Err(e) => return Err(e).context("Telegram sign-in failed"),
        }

        self.save_session()?;
        Ok(())
    }

    /// Display name and numeric id of the signed-in account.
    pub async fn identity(&self) -> Result<(String, i64)> {
        let me = self
            .client
            .get_me()
            .await
            .context("Failed to query own identity")?;
        Ok((me.full_name(), me.id()))
    }

    /// Push one emoji status update; `Clear` removes the active status.
    ///
    /// A single atomic call: there is no partial-update state to clean up
    /// on failure.
    pub async fn update_status(&self, status: &EmojiStatus) -> Result<()> {
        self.client
            .invoke(&tl::functions::account::UpdateEmojiStatus {
                emoji_status: to_tl_status(status),
            })
            .await
            .context("Failed to update emoji status")?;
        Ok(())
    }

    /// Persist the session so later runs skip the interactive sign-in.
    pub fn save_session(&self) -> Result<()> {
        self.client
            .session()
            .save_to_file(&self.session_file)
            .context("Failed to save Telegram session file")
    }
}

fn to_tl_status(status: &EmojiStatus) -> tl::enums::EmojiStatus {
    match status {
        EmojiStatus::Set(document_id) => tl::types::EmojiStatus {
            document_id: *document_id,
        }
        .into(),
        EmojiStatus::Clear => tl::types::EmojiStatusEmpty {}.into(),
    }
}

fn prompt(message: &str) -> Result<String> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(message.as_bytes())?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_to_tl_mapping() {
        let set: tl::enums::EmojiStatus = tl::types::EmojiStatus { document_id: 42 }.into();
        assert_eq!(to_tl_status(&EmojiStatus::Set(42)), set);

        let clear: tl::enums::EmojiStatus = tl::types::EmojiStatusEmpty {}.into();
        assert_eq!(to_tl_status(&EmojiStatus::Clear), clear);
    }
}
