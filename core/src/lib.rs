// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Core components shared by swiftsign service crates.
//!
//! This crate provides:
//!
//! - [`Context`]: the runtime seam carrying an [`HttpSend`] transport and an [`Env`]
//!   source for configuration lookup.
//! - [`Error`] and [`ErrorKind`]: the error taxonomy every service reports through.
//! - [`utils::Redact`]: a helper for keeping secrets out of `Debug` output.

mod context;
pub use context::Context;
pub use context::HttpSend;

mod env;
pub use env::Env;
pub use env::OsEnv;
pub use env::StaticEnv;

mod error;
pub use error::Error;
pub use error::ErrorKind;
pub use error::Result;

pub mod utils;
