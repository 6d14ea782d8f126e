use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, TOML parsing fails,
    /// or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let config: Self = toml::from_str(&raw).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if no downstream backend is configured or a
    /// backend entry is malformed
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_has_downstreams()?;
        self.validate_backends()?;
        Ok(())
    }

    /// Ensure at least one downstream backend is configured
    fn validate_has_downstreams(&self) -> anyhow::Result<()> {
        if self.tts.backend.is_none() && self.stt.backend.is_none() {
            anyhow::bail!("at least one downstream must be configured (TTS backend or STT backend)");
        }

        Ok(())
    }

    fn validate_backends(&self) -> anyhow::Result<()> {
        if let Some(ref backend) = self.tts.backend
            && backend.base_url.is_empty()
        {
            anyhow::bail!("tts.backend.base_url must not be empty");
        }

        if let Some(ref backend) = self.stt.backend
            && backend.base_url.is_empty()
        {
            anyhow::bail!("stt.backend.base_url must not be empty");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Config, TtsBackendType};

    #[test]
    fn minimal_tts_config() {
        let config: Config = toml::from_str(
            r#"
            [tts.backend]
            type = "json_stream"
            base_url = "http://localhost:5002"
            "#,
        )
        .unwrap();

        config.validate().unwrap();
        assert!(matches!(
            config.tts.backend.unwrap().backend_type,
            TtsBackendType::JsonStream
        ));
        assert_eq!(config.tts.voices.default_language, "english");
        assert!(config.stt.backend.is_none());
    }

    #[test]
    fn no_downstream_is_rejected() {
        let config: Config = toml::from_str("").unwrap();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("at least one downstream"));
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let config: Config = toml::from_str(
            r#"
            [stt.backend]
            type = "whisper"
            base_url = ""
            "#,
        )
        .unwrap();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("stt.backend.base_url"));
    }

    #[test]
    fn voice_entries_parse() {
        let config: Config = toml::from_str(
            r#"
            [tts.backend]
            type = "raw_stream"
            base_url = "http://localhost:8020"

            [tts.voices]
            default_language = "hindi"

            [tts.voices.languages.hindi]
            male = "hi-IN-MadhurNeural"
            female = "hi-IN-SwararaNeural"
            codes = ["hi", "hi-in"]
            "#,
        )
        .unwrap();

        let entry = &config.tts.voices.languages["hindi"];
        assert_eq!(entry.female, "hi-IN-SwararaNeural");
        assert_eq!(entry.codes, vec!["hi", "hi-in"]);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = toml::from_str::<Config>(
            r#"
            [tts.backend]
            type = "json_stream"
            base_url = "http://localhost:5002"
            voice = "en-US-AriaNeural"
            "#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("voice"));
    }
}
