//
//  topgg
//  api/current/commands.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Discord application command descriptors.
//!
//! `POST /projects/@me/commands` replaces the command list shown on the
//! bot's Top.gg page. The payload mirrors Discord's application command
//! objects; enum-like fields are integers on the wire.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::common::{optional, Snowflake};

/// Error returned when an integer does not name a known variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} value {value}")]
pub struct UnknownDiscriminant {
    kind: &'static str,
    value: u8,
}

macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident = $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(into = "u8", try_from = "u8")]
        pub enum $name {
            $($variant = $value),+
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> Self {
                value as u8
            }
        }

        impl TryFrom<u8> for $name {
            type Error = UnknownDiscriminant;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $($value => Ok(Self::$variant),)+
                    _ => Err(UnknownDiscriminant {
                        kind: stringify!($name),
                        value,
                    }),
                }
            }
        }
    };
}

wire_enum! {
    /// Kind of application command.
    ApplicationCommandType {
        ChatInput = 1,
        User = 2,
        Message = 3,
        PrimaryEntryPoint = 4,
    }
}

wire_enum! {
    /// Kind of command option.
    ApplicationCommandOptionType {
        SubCommand = 1,
        SubCommandGroup = 2,
        String = 3,
        Integer = 4,
        Boolean = 5,
        User = 6,
        Channel = 7,
        Role = 8,
        Mentionable = 9,
        Number = 10,
        Attachment = 11,
    }
}

wire_enum! {
    /// Channel kinds a channel option may be restricted to.
    ChannelType {
        GuildText = 0,
        Dm = 1,
        GuildVoice = 2,
        GroupDm = 3,
        GuildCategory = 4,
        GuildAnnouncement = 5,
        AnnouncementThread = 10,
        PublicThread = 11,
        PrivateThread = 12,
        GuildStageVoice = 13,
        GuildDirectory = 14,
        GuildForum = 15,
        GuildMedia = 16,
    }
}

wire_enum! {
    /// Where an application can be installed.
    IntegrationType {
        GuildInstall = 0,
        UserInstall = 1,
    }
}

wire_enum! {
    /// Where a command can be used.
    InteractionContextType {
        Guild = 0,
        BotDm = 1,
        PrivateChannel = 2,
    }
}

wire_enum! {
    /// Who handles a primary entry point command.
    EntryPointCommandHandlerType {
        AppHandler = 1,
        DiscordLaunchActivity = 2,
    }
}

/// An application command.
///
/// Only `name` and `description` are required; every other field is left
/// out of the request when unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationCommand {
    #[serde(default, with = "optional", skip_serializing_if = "Option::is_none")]
    pub id: Option<Snowflake>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ApplicationCommandType>,

    #[serde(default, with = "optional", skip_serializing_if = "Option::is_none")]
    pub application_id: Option<Snowflake>,

    #[serde(default, with = "optional", skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_localizations: Option<HashMap<String, String>>,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_localizations: Option<HashMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ApplicationCommandOption>>,

    /// Permission bit set, as a decimal string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_member_permissions: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dm_permission: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_permission: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nsfw: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_types: Option<Vec<IntegrationType>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contexts: Option<Vec<InteractionContextType>>,

    /// Autoincrementing version identifier.
    #[serde(default, with = "optional", skip_serializing_if = "Option::is_none")]
    pub version: Option<Snowflake>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handler: Option<EntryPointCommandHandlerType>,
}

impl ApplicationCommand {
    /// A slash command with the given name and description.
    pub fn chat_input(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: Some(ApplicationCommandType::ChatInput),
            name: name.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    /// Appends an option.
    pub fn option(mut self, option: ApplicationCommandOption) -> Self {
        self.options.get_or_insert_with(Vec::new).push(option);
        self
    }
}

/// A parameter of an application command, or a nested subcommand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationCommandOption {
    #[serde(rename = "type")]
    pub kind: ApplicationCommandOptionType,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_localizations: Option<HashMap<String, String>>,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_localizations: Option<HashMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<ApplicationCommandOptionChoice>>,

    /// Nested options of a subcommand or subcommand group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ApplicationCommandOption>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_types: Option<Vec<ChannelType>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<bool>,
}

impl ApplicationCommandOption {
    pub fn new(kind: ApplicationCommandOptionType, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            name_localizations: None,
            description: description.into(),
            description_localizations: None,
            required: None,
            choices: None,
            options: None,
            channel_types: None,
            min_value: None,
            max_value: None,
            min_length: None,
            max_length: None,
            autocomplete: None,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Appends a predefined choice.
    pub fn choice(mut self, choice: ApplicationCommandOptionChoice) -> Self {
        self.choices.get_or_insert_with(Vec::new).push(choice);
        self
    }
}

/// Value of a predefined option choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChoiceValue {
    String(String),
    Integer(i64),
    Number(f64),
}

impl From<&str> for ChoiceValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ChoiceValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for ChoiceValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for ChoiceValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// A predefined choice of a string, integer or number option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationCommandOptionChoice {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_localizations: Option<HashMap<String, String>>,

    pub value: ChoiceValue,
}

impl ApplicationCommandOptionChoice {
    pub fn new(name: impl Into<String>, value: impl Into<ChoiceValue>) -> Self {
        Self {
            name: name.into(),
            name_localizations: None,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::case_insensitive;
    use serde_json::json;

    #[test]
    fn test_command_payload_shape() {
        let command = ApplicationCommand::chat_input("rank", "Show rank").option(
            ApplicationCommandOption::new(ApplicationCommandOptionType::String, "period", "Time period")
                .required(true)
                .choice(ApplicationCommandOptionChoice::new("Week", "week"))
                .choice(ApplicationCommandOptionChoice::new("Days", 30i64)),
        );

        assert_eq!(
            serde_json::to_value(vec![command]).unwrap(),
            json!([{
                "type": 1,
                "name": "rank",
                "description": "Show rank",
                "options": [{
                    "type": 3,
                    "name": "period",
                    "description": "Time period",
                    "required": true,
                    "choices": [
                        {"name": "Week", "value": "week"},
                        {"name": "Days", "value": 30}
                    ]
                }]
            }])
        );
    }

    #[test]
    fn test_enums_are_integers() {
        assert_eq!(serde_json::to_string(&ChannelType::GuildForum).unwrap(), "15");
        assert_eq!(serde_json::from_str::<ChannelType>("11").unwrap(), ChannelType::PublicThread);
        assert!(serde_json::from_str::<ChannelType>("6").is_err());
        assert_eq!(
            IntegrationType::try_from(7u8).unwrap_err().to_string(),
            "unknown IntegrationType value 7"
        );
    }

    #[test]
    fn test_command_decodes_with_localizations() {
        let command: ApplicationCommand = case_insensitive::from_str(
            r#"{
                "id": "1",
                "Name": "ping",
                "description": "Pong",
                "name_localizations": {"en-US": "ping", "de": "Ping"},
                "contexts": [0, 2],
                "version": 3
            }"#,
        )
        .unwrap();

        assert_eq!(command.id, Some(Snowflake::new(1)));
        assert_eq!(command.name, "ping");
        let names = command.name_localizations.unwrap();
        assert_eq!(names.get("en-US").map(String::as_str), Some("ping"));
        assert_eq!(
            command.contexts,
            Some(vec![InteractionContextType::Guild, InteractionContextType::PrivateChannel])
        );
        assert_eq!(command.version, Some(Snowflake::new(3)));
    }

    #[test]
    fn test_choice_values() {
        let choice: ApplicationCommandOptionChoice = serde_json::from_str(r#"{"name":"Half","value":2.5}"#).unwrap();
        assert_eq!(choice.value, ChoiceValue::Number(2.5));
        let choice: ApplicationCommandOptionChoice = serde_json::from_str(r#"{"name":"One","value":1}"#).unwrap();
        assert_eq!(choice.value, ChoiceValue::Integer(1));
    }
}
