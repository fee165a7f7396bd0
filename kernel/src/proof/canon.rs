//! Canonical step encoding: the bytes every trace digest hashes.
//!
//! Records are written straight to compact JSON, with no intermediate value
//! tree. Each record has a fixed field set, so keys go out in byte order by
//! construction; [`Fields`] re-checks that order in debug builds.
//!
//! ```text
//! header    {"algorithm":<id>,"step_count":<n>}
//! step      {"auxiliary":<aux>|null,"indices":[..],"kind":<wire name>,"snapshot":<snap>}
//! element   {"id":<u32>,"value":<i64>}
//! grid      {"cells":[[<code>,..],..],"cols":<n>,"rows":<n>}
//! range     {"high":<n>,"low":<n>,"type":"range"}
//! cost      {"type":"distance"|"f_score"|"heuristic","value":<u32>}
//! ```
//!
//! The only strings are identifiers (algorithm ids, step wire names, record
//! tags), so they are written unescaped. Numbers are integers in plain
//! decimal.

use std::sync::Arc;

use crate::model::{Auxiliary, Element, Grid, Snapshot, Step};

/// Canonical bytes of a trace header.
#[must_use]
pub fn header_bytes(algorithm: &str, step_count: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(48);
    let mut fields = Fields::open(&mut out);
    write_name(fields.key("algorithm"), algorithm);
    write_u64(fields.key("step_count"), step_count as u64);
    fields.close();
    out
}

/// Canonical bytes of one step.
#[must_use]
pub fn step_bytes<S: Snapshot>(step: &Step<S>) -> Vec<u8> {
    let mut out = Vec::new();
    encode_step(step, &mut out);
    out
}

/// Append the canonical form of `step` to `out`.
pub fn encode_step<S: Snapshot>(step: &Step<S>, out: &mut Vec<u8>) {
    let mut fields = Fields::open(out);
    match step.auxiliary {
        Some(aux) => encode_auxiliary(aux, fields.key("auxiliary")),
        None => fields.key("auxiliary").extend_from_slice(b"null"),
    }
    write_list(fields.key("indices"), &step.indices, |out, &i| write_u64(out, i as u64));
    write_name(fields.key("kind"), step.kind.as_str());
    step.snapshot.encode_canonical(fields.key("snapshot"));
    fields.close();
}

fn encode_auxiliary(aux: Auxiliary, out: &mut Vec<u8>) {
    let mut fields = Fields::open(out);
    match aux {
        Auxiliary::Range { low, high } => {
            write_u64(fields.key("high"), high as u64);
            write_u64(fields.key("low"), low as u64);
            write_name(fields.key("type"), "range");
        }
        Auxiliary::Distance(cost) => encode_cost(&mut fields, "distance", cost),
        Auxiliary::FScore(cost) => encode_cost(&mut fields, "f_score", cost),
        Auxiliary::Heuristic(cost) => encode_cost(&mut fields, "heuristic", cost),
    }
    fields.close();
}

fn encode_cost(fields: &mut Fields<'_>, tag: &str, cost: u32) {
    write_name(fields.key("type"), tag);
    write_u64(fields.key("value"), u64::from(cost));
}

impl Snapshot for Vec<Element> {
    fn encode_canonical(&self, out: &mut Vec<u8>) {
        write_list(out, self, |out, e| {
            let mut fields = Fields::open(out);
            write_u64(fields.key("id"), u64::from(e.id));
            write_i64(fields.key("value"), e.value);
            fields.close();
        });
    }
}

impl Snapshot for Arc<Grid> {
    fn encode_canonical(&self, out: &mut Vec<u8>) {
        let mut fields = Fields::open(out);
        write_list(fields.key("cells"), &self.to_codes(), |out, row| {
            write_list(out, row, |out, &code| write_u64(out, u64::from(code)));
        });
        write_u64(fields.key("cols"), self.cols() as u64);
        write_u64(fields.key("rows"), self.rows() as u64);
        fields.close();
    }
}

/// One JSON object under construction. Keys must arrive in byte order.
struct Fields<'a> {
    out: &'a mut Vec<u8>,
    last: Option<&'static str>,
}

impl<'a> Fields<'a> {
    fn open(out: &'a mut Vec<u8>) -> Self {
        out.push(b'{');
        Self { out, last: None }
    }

    /// Write `key:` and hand back the buffer for its value.
    fn key(&mut self, key: &'static str) -> &mut Vec<u8> {
        debug_assert!(
            self.last.map_or(true, |prev| prev < key),
            "canonical key {key:?} out of order"
        );
        if self.last.is_some() {
            self.out.push(b',');
        }
        write_name(self.out, key);
        self.out.push(b':');
        self.last = Some(key);
        &mut *self.out
    }

    fn close(self) {
        self.out.push(b'}');
    }
}

fn write_list<T>(out: &mut Vec<u8>, items: &[T], mut each: impl FnMut(&mut Vec<u8>, &T)) {
    out.push(b'[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(b',');
        }
        each(out, item);
    }
    out.push(b']');
}

fn write_name(out: &mut Vec<u8>, name: &str) {
    debug_assert!(
        name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_'),
        "{name:?} is not an identifier"
    );
    out.push(b'"');
    out.extend_from_slice(name.as_bytes());
    out.push(b'"');
}

#[allow(clippy::cast_possible_truncation)]
fn write_u64(out: &mut Vec<u8>, mut value: u64) {
    let mut digits = [0u8; 20];
    let mut start = digits.len();
    loop {
        start -= 1;
        digits[start] = b'0' + (value % 10) as u8;
        value /= 10;
        if value == 0 {
            break;
        }
    }
    out.extend_from_slice(&digits[start..]);
}

fn write_i64(out: &mut Vec<u8>, value: i64) {
    if value < 0 {
        out.push(b'-');
    }
    write_u64(out, value.unsigned_abs());
}
