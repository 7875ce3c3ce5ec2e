//
//  topgg
//  api/current/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Current Top.gg API (`https://top.gg/api/v1`) types.
//!
//! Requests to this surface carry `Bearer <token>` as the `Authorization`
//! header. The token identifies the project, so paths use `@me` instead of a
//! bot id.
//!
//! # Module Organization
//!
//! - [`commands`] - Discord application command descriptors
//! - [`votes`] - Per-user vote status
//!
//! # Example
//!
//! ```rust
//! use topgg::api::current::{ApplicationCommand, ApplicationCommandOption, ApplicationCommandOptionType};
//!
//! let command = ApplicationCommand::chat_input("vote", "Vote for the bot")
//!     .option(ApplicationCommandOption::new(
//!         ApplicationCommandOptionType::User,
//!         "user",
//!         "Who to remind",
//!     ));
//! assert_eq!(command.options.map(|o| o.len()), Some(1));
//! ```

pub mod commands;
pub mod votes;

pub use commands::*;
pub use votes::*;
