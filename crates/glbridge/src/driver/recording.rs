//! In-memory driver for unit tests.
//!
//! Records every command, hands out object names, emulates buffer contents
//! for read-back and lets tests inject driver errors or missing modules.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::consts;

use super::{GlCmd, GlDriver, GlReply, GlVersion};

#[derive(Debug, Default)]
pub(crate) struct RecordingDriver {
    /// Every executed command except `GetError`, in order.
    pub calls: Vec<GlCmd>,
    /// Modules requested through `load_module`, in order.
    pub loads: Vec<GlVersion>,
    unavailable: HashSet<GlVersion>,
    errors: VecDeque<u32>,
    fail_on: HashMap<&'static str, VecDeque<u32>>,
    replies: HashMap<&'static str, GlReply>,
    buffers: HashMap<u32, Vec<u8>>,
    bound_buffers: HashMap<u32, u32>,
    next_name: u32,
}

impl RecordingDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `load_module(version)` report the module as missing.
    pub fn refuse(&mut self, version: GlVersion) {
        self.unavailable.insert(version);
    }

    /// Queues an error code for the next `GetError`.
    pub fn queue_error(&mut self, code: u32) {
        self.errors.push_back(code);
    }

    /// Raises `code` after the next execution of the entry point `name`.
    pub fn fail_on(&mut self, name: &'static str, code: u32) {
        self.fail_on.entry(name).or_default().push_back(code);
    }

    /// Canned reply for every execution of the entry point `name`.
    pub fn reply_with(&mut self, name: &'static str, reply: GlReply) {
        self.replies.insert(name, reply);
    }

    pub fn count(&self, name: &str) -> usize {
        self.calls.iter().filter(|c| c.name() == name).count()
    }

    pub fn named(&self, name: &str) -> Vec<&GlCmd> {
        self.calls.iter().filter(|c| c.name() == name).collect()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    fn store_for(&mut self, target: u32) -> &mut Vec<u8> {
        let buffer = self.bound_buffers.get(&target).copied().unwrap_or(0);
        self.buffers.entry(buffer).or_default()
    }
}

impl GlDriver for RecordingDriver {
    fn load_module(&mut self, version: GlVersion) -> bool {
        self.loads.push(version);
        !self.unavailable.contains(&version)
    }

    fn execute(&mut self, cmd: GlCmd) -> GlReply {
        if cmd == GlCmd::GetError {
            return GlReply::Uint(self.errors.pop_front().unwrap_or(consts::NO_ERROR));
        }

        let name = cmd.name();
        self.calls.push(cmd.clone());
        if let Some(code) = self.fail_on.get_mut(name).and_then(VecDeque::pop_front) {
            self.errors.push_back(code);
        }

        match cmd {
            GlCmd::Create(_) | GlCmd::CreateShader { .. } | GlCmd::FenceSync { .. } => {
                self.next_name += 1;
                GlReply::Name(self.next_name)
            }
            GlCmd::BindBuffer { target, buffer } => {
                self.bound_buffers.insert(target, buffer);
                GlReply::Unit
            }
            GlCmd::BufferData { target, data, .. } => {
                *self.store_for(target) = data.as_bytes().to_vec();
                GlReply::Unit
            }
            GlCmd::BufferDataSize { target, size, .. } => {
                *self.store_for(target) = vec![0; size.max(0) as usize];
                GlReply::Unit
            }
            GlCmd::BufferSubData { target, offset, data } => {
                let store = self.store_for(target);
                let start = offset.max(0) as usize;
                let end = start + data.byte_len();
                if store.len() < end {
                    store.resize(end, 0);
                }
                store[start..end].copy_from_slice(data.as_bytes());
                GlReply::Unit
            }
            GlCmd::GetBufferSubData { target, offset, mut dst } => {
                let store = self.store_for(target);
                let start = (offset.max(0) as usize).min(store.len());
                let src = &store[start..];
                let bytes = dst.as_bytes_mut();
                let n = bytes.len().min(src.len());
                bytes[..n].copy_from_slice(&src[..n]);
                GlReply::Buffer(dst)
            }
            GlCmd::ReadPixels { mut dst, .. } => {
                for (i, b) in dst.as_bytes_mut().iter_mut().enumerate() {
                    *b = i as u8;
                }
                GlReply::Buffer(dst)
            }
            _ => self.replies.get(name).cloned().unwrap_or_default(),
        }
    }
}
