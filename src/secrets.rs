//! Node credentials, baked in at compile time.
//!
//! Fill in the placeholders below before flashing, or set the matching
//! `VAKTPOST_*` environment variable when building to override a value
//! without touching this file. Keep real values out of version control.

pub const WIFI_SSID: &str = match option_env!("VAKTPOST_WIFI_SSID") {
    Some(ssid) => ssid,
    None => "your_wifi_name",
};

pub const WIFI_PASSWORD: &str = match option_env!("VAKTPOST_WIFI_PASSWORD") {
    Some(password) => password,
    None => "your_wifi_password",
};

pub const MQTT_CLIENT_ID: &str = match option_env!("VAKTPOST_MQTT_CLIENT_ID") {
    Some(client_id) => client_id,
    None => "your_mqtt_client_id",
};

pub const MQTT_USERNAME: &str = match option_env!("VAKTPOST_MQTT_USERNAME") {
    Some(username) => username,
    None => "your_mqtt_username",
};

pub const MQTT_PASSWORD: &str = match option_env!("VAKTPOST_MQTT_PASSWORD") {
    Some(password) => password,
    None => "your_mqtt_password",
};

pub const TELEGRAM_BOT_TOKEN: &str = match option_env!("VAKTPOST_TELEGRAM_BOT_TOKEN") {
    Some(token) => token,
    None => "your_bot_token",
};

// The chat id is numeric, but the Bot API takes it as text in the request
// body so it stays a string here.
pub const TELEGRAM_CHAT_ID: &str = match option_env!("VAKTPOST_TELEGRAM_CHAT_ID") {
    Some(chat_id) => chat_id,
    None => "your_chat_id",
};
