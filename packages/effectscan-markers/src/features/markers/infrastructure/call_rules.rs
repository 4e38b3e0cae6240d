//! Direct call classification
//!
//! The non-inferential rule tier: a fixed-priority list of heuristics over
//! the resolved dotted callee name. Rules run in order, first match wins,
//! and each produces at most one token per call. A rule may also *claim* a
//! call without a token (a `print` into a caller-chosen stream), which
//! stops the chain.

use super::registry::ExtractionContext;
use crate::features::markers::domain::{Marker, Resolved, Token};
use crate::features::parsing::domain::python;
use crate::features::parsing::domain::{NodeKind, SyntaxNode};
use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    /// Entropy consumers flagged by bare name alone, no inference needed.
    static ref DEFINITELY_RANDOM_FUNCS: HashSet<&'static str> = HashSet::from([
        "randint",
        "randbytes",
        "randrange",
        "getrandbits",
        "shuffle",
    ]);

    /// The `random` module's public surface. A bare call matching one of
    /// these is random only when inference confirms a `random.Random`
    /// receiver.
    static ref MAYBE_RANDOM_FUNCS: HashSet<&'static str> = HashSet::from([
        "betavariate",
        "choice",
        "choices",
        "expovariate",
        "gammavariate",
        "gauss",
        "getrandbits",
        "getstate",
        "lognormvariate",
        "normalvariate",
        "paretovariate",
        "randbytes",
        "randint",
        "random",
        "randrange",
        "sample",
        "seed",
        "setstate",
        "shuffle",
        "triangular",
        "uniform",
        "vonmisesvariate",
        "weibullvariate",
        "Random",
        "SystemRandom",
    ]);

    /// Process management and subprocess invocation.
    static ref SYSCALLS: HashSet<&'static str> = HashSet::from([
        "os.abort",
        "os.execv",
        "os.fork",
        "os.forkpty",
        "os.kill",
        "os.killpg",
        "os.plock",
        "os.posix_spawn",
        "os.posix_spawnp",
        "os.putenv",
        "os.startfile",
        "os.system",
        "os.wait",
        "os.wait3",
        "os.wait4",
        "os.waitid",
        "os.waitpid",
        "subprocess.call",
        "subprocess.check_call",
        "subprocess.check_out",
        "subprocess.getoutput",
        "subprocess.getstatusoutput",
        "subprocess.run",
        "subprocess.Popen",
    ]);

    /// Wall-clock and monotonic-clock accessors.
    static ref TIMES: HashSet<&'static str> = HashSet::from([
        "os.times",
        "datetime.now",
        "date.today",
        "datetime.datetime.now",
        "datetime.date.today",
        "time.clock_gettime",
        "time.clock_gettime_ns",
        "time.get_clock_info",
        "time.monotonic",
        "time.monotonic_ns",
        "time.perf_counter",
        "time.perf_counter_ns",
        "time.process_time",
        "time.process_time_ns",
        "time.time",
        "time.time_ns",
        "time.thread_time",
        "time.thread_time_ns",
    ]);
}

const SYSCALL_PREFIXES: &[&str] = &["os.exec", "os.spawn", "os.popen"];

/// A call with its resolved dotted name.
pub struct CallSite<'a> {
    pub node: &'a SyntaxNode,
    pub name: &'a str,
}

impl CallSite<'_> {
    fn token(&self, marker: Marker) -> Token {
        Token::at(marker, self.node.span)
    }
}

/// Outcome of one rule for one call.
pub enum RuleOutcome {
    /// The rule matched and classified the call.
    Token(Token),
    /// The rule matched but the call is deliberately unflagged; no later
    /// rule or inference runs.
    Claimed,
    /// Not this rule's call.
    Pass,
}

pub type CallRule = fn(&CallSite<'_>, &ExtractionContext<'_>) -> RuleOutcome;

/// Priority-ordered rule list; evaluation stops at the first non-`Pass`.
pub const CALL_RULES: &[CallRule] = &[
    check_print,
    check_streams,
    check_dynamic_import,
    check_random,
    check_syscall,
    check_time,
    check_open,
    check_pathlib_write,
];

/// `print(...)` — marker depends on the `file=` keyword. Absent means
/// stdout; a named standard stream keeps its marker; anything else is a
/// caller-chosen stream and stays unflagged.
fn check_print(call: &CallSite<'_>, _ctx: &ExtractionContext<'_>) -> RuleOutcome {
    if call.name != "print" {
        return RuleOutcome::Pass;
    }
    for (name, value) in python::call_keywords(call.node) {
        if name != "file" {
            continue;
        }
        return match python::dotted_name(value).as_deref() {
            Some("stdout") | Some("sys.stdout") => {
                RuleOutcome::Token(call.token(Marker::Stdout).with_value("print"))
            }
            Some("stderr") | Some("sys.stderr") => {
                RuleOutcome::Token(call.token(Marker::Stderr).with_value("print"))
            }
            _ => RuleOutcome::Claimed,
        };
    }
    RuleOutcome::Token(call.token(Marker::Stdout).with_value("print"))
}

/// Calls on attribute chains rooted at the standard streams, plus `input`.
fn check_streams(call: &CallSite<'_>, _ctx: &ExtractionContext<'_>) -> RuleOutcome {
    if call.name.starts_with("sys.stdout") {
        return RuleOutcome::Token(call.token(Marker::Stdout).with_value("sys.stdout."));
    }
    if call.name.starts_with("sys.stderr") {
        return RuleOutcome::Token(call.token(Marker::Stderr).with_value("sys.stderr."));
    }
    if call.name.starts_with("sys.stdin") {
        return RuleOutcome::Token(call.token(Marker::Stdin).with_value("sys.stdin."));
    }
    if call.name == "input" {
        return RuleOutcome::Token(call.token(Marker::Stdin).with_value("input"));
    }
    RuleOutcome::Pass
}

fn check_dynamic_import(call: &CallSite<'_>, _ctx: &ExtractionContext<'_>) -> RuleOutcome {
    if call.name == "__import__" {
        return RuleOutcome::Token(call.token(Marker::Import));
    }
    RuleOutcome::Pass
}

fn check_random(call: &CallSite<'_>, ctx: &ExtractionContext<'_>) -> RuleOutcome {
    if is_random(call, ctx) {
        return RuleOutcome::Token(call.token(Marker::Random).with_value(call.name));
    }
    RuleOutcome::Pass
}

fn is_random(call: &CallSite<'_>, ctx: &ExtractionContext<'_>) -> bool {
    if call.name.starts_with("random.") {
        return true;
    }
    if call.name.contains('.') {
        return false;
    }
    if DEFINITELY_RANDOM_FUNCS.contains(call.name) {
        return true;
    }
    if MAYBE_RANDOM_FUNCS.contains(call.name) {
        let Some(func) = python::call_function(call.node) else {
            return false;
        };
        for resolved in ctx.oracle.infer(func) {
            if let Resolved::BoundMethod { receiver_type } = resolved {
                if receiver_type == "random.Random" {
                    return true;
                }
            }
        }
    }
    false
}

fn check_syscall(call: &CallSite<'_>, _ctx: &ExtractionContext<'_>) -> RuleOutcome {
    let is_syscall = SYSCALLS.contains(call.name)
        || SYSCALL_PREFIXES.iter().any(|p| call.name.starts_with(p));
    if is_syscall {
        return RuleOutcome::Token(call.token(Marker::Syscall).with_value(call.name));
    }
    RuleOutcome::Pass
}

fn check_time(call: &CallSite<'_>, _ctx: &ExtractionContext<'_>) -> RuleOutcome {
    if TIMES.contains(call.name) || TIMES.contains(format!("time.{}", call.name).as_str()) {
        return RuleOutcome::Token(call.token(Marker::Time).with_value(call.name));
    }
    RuleOutcome::Pass
}

fn check_open(call: &CallSite<'_>, _ctx: &ExtractionContext<'_>) -> RuleOutcome {
    if call.name != "open" {
        return RuleOutcome::Pass;
    }
    let marker = if open_mode_is_write(call.node) {
        Marker::Write
    } else {
        Marker::Read
    };
    RuleOutcome::Token(call.token(marker).with_value("open"))
}

fn check_pathlib_write(call: &CallSite<'_>, ctx: &ExtractionContext<'_>) -> RuleOutcome {
    if pathlib_write(call.node, ctx) {
        return RuleOutcome::Token(call.token(Marker::Write).with_value("Path.open"));
    }
    RuleOutcome::Pass
}

/// Any positional string literal containing `w`, or a `mode=` literal
/// containing `w`. Unparseable mode values never match.
pub(crate) fn open_mode_is_write(call: &SyntaxNode) -> bool {
    for arg in python::call_arguments(call) {
        if let Some(text) = python::string_literal(arg) {
            if text.contains('w') {
                return true;
            }
        }
    }
    for (name, value) in python::call_keywords(call) {
        if name != "mode" {
            continue;
        }
        if let Some(text) = python::string_literal(value) {
            if text.contains('w') {
                return true;
            }
        }
    }
    false
}

/// A `write_text`/`write_bytes`/`open`-for-write call whose receiver is
/// inferred to be a pathlib instance.
pub(crate) fn pathlib_write(node: &SyntaxNode, ctx: &ExtractionContext<'_>) -> bool {
    if node.kind != NodeKind::Call {
        return false;
    }
    let Some(func) = python::call_function(node) else {
        return false;
    };
    let Some((receiver, attr)) = python::attribute_parts(func) else {
        return false;
    };
    if !matches!(attr, "write_text" | "write_bytes" | "open") {
        return false;
    }
    if attr == "open" && !open_mode_is_write(node) {
        return false;
    }
    ctx.oracle.infer(receiver).iter().any(|resolved| {
        matches!(resolved, Resolved::Instance { type_name } if type_name.starts_with("pathlib."))
    })
}
