/*
 * ==========================================================================
 * BLPARSE - BL Language Parser
 * ==========================================================================
 *
 * File:     ast/mod.rs
 * Purpose:  The parsed representation of BL programs and statements.
 *
 * Author:   Sam Wilcox
 *
 * License:
 * This file is part of the BLPARSE project.
 *
 * BLPARSE is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

pub mod condition;
pub mod program;
pub mod stmt;

pub use condition::Condition;
pub use program::{Context, InvalidProgram, Program};
pub use stmt::Statement;
