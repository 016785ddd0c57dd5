// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

mod create;
mod delete;
mod deploy;
mod read;

pub use create::TableToCreate;
