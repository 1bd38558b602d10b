//! Interactive menu loop.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use yildiz_core::{Mode, YildizCipher};

use crate::avalanche;

/// Key used when the user leaves the key prompt empty.
pub const DEFAULT_KEY: &str = "gizli123";

/// Menu-driven console over arbitrary input and output streams.
pub struct Console<R, W> {
    input: R,
    output: W,
    mode: Mode,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, mode: Mode) -> Self {
        Self {
            input,
            output,
            mode,
        }
    }

    /// Runs the console until the user exits or input ends.
    ///
    /// When `key` is `None` the user is prompted for one. Decryption failures
    /// are reported and the menu resumes; only I/O errors end the session
    /// early.
    pub fn run(&mut self, key: Option<String>) -> Result<()> {
        writeln!(self.output, "=== Yildiz Cipher ({}) ===", self.mode)?;

        let key = match key {
            Some(key) => key,
            None => match self.prompt("Enter key (e.g. gizli123): ")? {
                Some(key) if !key.is_empty() => key,
                Some(_) => {
                    writeln!(self.output, "Using default key: {DEFAULT_KEY}")?;
                    DEFAULT_KEY.to_owned()
                }
                None => return Ok(()),
            },
        };
        let cipher = YildizCipher::new(&key);

        loop {
            writeln!(self.output)?;
            writeln!(self.output, "--- SELECT AN OPERATION ---")?;
            writeln!(self.output, "1. Encrypt text")?;
            writeln!(self.output, "2. Decrypt")?;
            writeln!(self.output, "3. Avalanche effect test")?;
            writeln!(self.output, "4. Exit")?;

            let Some(choice) = self.prompt("Your choice (1/2/3/4): ")? else {
                return Ok(());
            };
            match choice.trim() {
                "1" => self.encrypt(&cipher)?,
                "2" => self.decrypt(&cipher)?,
                "3" => self.avalanche(&cipher)?,
                "4" => {
                    writeln!(self.output, "Exiting...")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid choice, try again.")?,
            }
        }
    }

    fn encrypt(&mut self, cipher: &YildizCipher) -> Result<()> {
        if let Some(text) = self.prompt_non_empty("\nText to encrypt: ")? {
            let ciphertext = cipher.encrypt(&text, self.mode);
            writeln!(self.output, "--> Ciphertext (hex): {ciphertext}")?;
        }
        Ok(())
    }

    fn decrypt(&mut self, cipher: &YildizCipher) -> Result<()> {
        if let Some(hex) = self.prompt_non_empty("\nCiphertext (hex) to decrypt: ")? {
            match cipher.decrypt_text(hex.trim(), self.mode) {
                Ok(plaintext) => writeln!(self.output, "--> Plaintext: {plaintext}")?,
                Err(err) => writeln!(self.output, "error: decryption failed ({err})")?,
            }
        }
        Ok(())
    }

    fn avalanche(&mut self, cipher: &YildizCipher) -> Result<()> {
        let Some(text) = self.prompt_non_empty("\nText to test: ")? else {
            return Ok(());
        };
        let report = avalanche::analyze(cipher, &text, self.mode);
        writeln!(self.output)?;
        writeln!(self.output, "1. Text: {}", report.original)?;
        writeln!(self.output, "2. Text: {} (1 bit changed)", report.modified)?;
        writeln!(self.output, "--> Output 1: {}", report.first)?;
        writeln!(self.output, "--> Output 2: {}", report.second)?;
        writeln!(self.output)?;
        writeln!(
            self.output,
            "Differing characters: {} / {}",
            report.differing, report.total
        )?;
        writeln!(self.output, "Change ratio (avalanche): {:.2}%", report.ratio())?;
        if report.is_strong() {
            writeln!(self.output, "RESULT: avalanche effect strong.")?;
        } else {
            writeln!(self.output, "RESULT: avalanche effect weak.")?;
        }
        Ok(())
    }

    fn prompt_non_empty(&mut self, label: &str) -> Result<Option<String>> {
        Ok(self.prompt(label)?.filter(|line| !line.is_empty()))
    }

    /// Reads one line without its terminator; `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("read input")?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(script: &str, key: Option<&str>, mode: Mode) -> String {
        let mut out = Vec::new();
        Console::new(script.as_bytes(), &mut out, mode)
            .run(key.map(str::to_owned))
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn encrypts_known_vector() {
        let out = session("1\nHello World\n4\n", Some("TestKey123"), Mode::Ecb);
        assert!(out.contains("--> Ciphertext (hex): 712eca7007fad3aaf4c31b009db7e3a1"));
        assert!(out.ends_with("Exiting...\n"));
    }

    #[test]
    fn decrypts_and_survives_bad_input() {
        let script = "2\nnot hex\n2\n712eca7007fad3aaf4c31b009db7e3a1\n4\n";
        let out = session(script, Some("TestKey123"), Mode::Ecb);
        assert!(out.contains("error: decryption failed (malformed hex"));
        assert!(out.contains("--> Plaintext: Hello World"));
    }

    #[test]
    fn empty_key_prompt_uses_default() {
        let cipher = YildizCipher::new(DEFAULT_KEY);
        let ct = cipher.encrypt("merhaba", Mode::Ecb);
        let out = session(&format!("\n2\n{ct}\n4\n"), None, Mode::Ecb);
        assert!(out.contains("Using default key: gizli123"));
        assert!(out.contains("--> Plaintext: merhaba"));
    }

    #[test]
    fn invalid_choice_and_eof_end_cleanly() {
        let out = session("9\n", Some("k"), Mode::Cbc);
        assert!(out.starts_with("=== Yildiz Cipher (CBC) ==="));
        assert!(out.contains("Invalid choice, try again."));
        assert!(!out.contains("Exiting..."));
    }

    #[test]
    fn avalanche_reports_ratio() {
        let out = session("3\nHello World\n4\n", Some("TestKey123"), Mode::Ecb);
        assert!(out.contains("2. Text: Hello Worle (1 bit changed)"));
        assert!(out.contains("Differing characters: "));
        assert!(out.contains("RESULT: avalanche effect"));
    }

    #[test]
    fn cbc_round_trip_through_console() {
        let cipher = YildizCipher::new("TestKey123");
        let ct = cipher.encrypt("Same Text", Mode::Cbc);
        let out = session(&format!("2\n  {ct}  \n4\n"), Some("TestKey123"), Mode::Cbc);
        assert!(out.contains("--> Plaintext: Same Text"));
    }
}
