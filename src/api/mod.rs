//
//  topgg
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Top.gg API Module
//!
//! HTTP client and wire types for both Top.gg API generations.
//!
//! ## Module Structure
//!
//! - [`client`] - The [`TopggClient`] facade
//! - [`builder`] - [`TopggClientBuilder`]
//! - [`pipeline`] - Authentication, dispatch, classification and decoding
//! - [`transport`] - The pluggable [`Transport`] and its `reqwest` implementation
//! - [`search`] - Bot search parameters and the fluent [`BotSearch`] builder
//! - [`legacy`] - Types of the legacy API (`/api`)
//! - [`current`] - Types of the current API (`/api/v1`)
//! - [`common`] - Failures, problem details and the snowflake codec
//!
//! ## API Generations
//!
//! | Generation | Base URL | Authorization |
//! |------------|----------|---------------|
//! | Legacy | `https://top.gg/api` | `<token>` |
//! | Current | `https://top.gg/api/v1` | `Bearer <token>` |

pub mod builder;

pub mod client;

pub mod common;

pub mod current;

pub mod legacy;

pub mod pipeline;

pub mod search;

pub mod transport;

pub use builder::TopggClientBuilder;
pub use client::TopggClient;
pub use common::{ApiError, ProblemDetails, Snowflake};
pub use pipeline::{ApiRequest, ApiVersion, Endpoints, RequestPipeline, DEFAULT_BASE_URL};
pub use search::{BotSearch, BotSortField, SearchParams};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportError};
