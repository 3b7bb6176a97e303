use std::time::Duration;

const DEFAULT_MAIN_ACTIVITY_CLASS: &str = "dev/dioxus/main/MainActivity";

/// Configuration for the picker on Android
///
/// This allows customization of the MainActivity class name for different apps.
#[derive(Debug, Clone)]
pub struct AndroidPickerConfig {
    /// Fully qualified class name in slash format (e.g., "com/example/myapp/MainActivity")
    pub main_activity_class: String,
    /// How long to wait for the user before giving up
    pub timeout: Duration,
    /// How often the activity is asked for a result
    pub poll_interval: Duration,
}

impl Default for AndroidPickerConfig {
    fn default() -> Self {
        Self {
            main_activity_class: DEFAULT_MAIN_ACTIVITY_CLASS.to_string(),
            timeout: Duration::from_secs(60),
            poll_interval: Duration::from_millis(100),
        }
    }
}

impl AndroidPickerConfig {
    /// Same class in the dotted form `ClassLoader.loadClass` expects
    pub fn main_activity_class_dotted(&self) -> String {
        self.main_activity_class.replace('/', ".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AndroidPickerConfig::default();
        assert_eq!(config.main_activity_class, "dev/dioxus/main/MainActivity");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.poll_interval, Duration::from_millis(100));
    }

    #[test]
    fn test_dotted_class_name() {
        let config = AndroidPickerConfig {
            main_activity_class: "com/example/app/MainActivity".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.main_activity_class_dotted(),
            "com.example.app.MainActivity"
        );
    }
}
