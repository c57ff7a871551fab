use phf::phf_map;

use super::{
    command::{Arity, Command, CommandAction},
    error::ShellErrorKind,
    registry::CommandRegistry,
};

mod add;
mod apply;
mod bin;
mod calc;
mod div;
mod echo;
mod hex;
mod iota;
mod mul;
mod quit;
mod sub;

/// A builtin's registry entry: its declared arity plus the action fn.
pub struct BuiltinDef {
    pub arity: Arity,
    pub action: CommandAction,
}

static BUILTINS: phf::Map<&'static str, BuiltinDef> = phf_map! {
    "quit" => BuiltinDef { arity: Arity::Exact(0), action: quit::quit },
    "echo" => BuiltinDef { arity: Arity::Exact(1), action: echo::echo },
    "add" => BuiltinDef { arity: Arity::Exact(2), action: add::add },
    "sub" => BuiltinDef { arity: Arity::Exact(2), action: sub::sub },
    "mul" => BuiltinDef { arity: Arity::Exact(2), action: mul::mul },
    "div" => BuiltinDef { arity: Arity::Exact(2), action: div::div },
    "hex" => BuiltinDef { arity: Arity::Exact(1), action: hex::hex },
    "bin" => BuiltinDef { arity: Arity::Exact(1), action: bin::bin },
    "iota" => BuiltinDef { arity: Arity::Exact(2), action: iota::iota },
    "apply" => BuiltinDef { arity: Arity::Variadic, action: apply::apply },
    "calc" => BuiltinDef { arity: Arity::Exact(1), action: calc::calc },
};

/// Register every builtin into `registry`.
pub fn register_builtins(registry: &mut CommandRegistry) {
    for (name, def) in BUILTINS.entries() {
        registry.register(Command::new(*name, def.arity, def.action));
    }
}

/// First two arguments parsed as floats, for the arithmetic family.
fn float_pair(name: &'static str, args: &[String]) -> Result<(f32, f32), ShellErrorKind> {
    match args {
        [lhs, rhs, ..] => Ok((lhs.parse()?, rhs.parse()?)),
        _ => Err(ShellErrorKind::TooFewArguments {
            name,
            expected: 2,
            received: args.len(),
        }),
    }
}

fn integer_arg(name: &'static str, args: &[String]) -> Result<u64, ShellErrorKind> {
    match args.first() {
        Some(arg) => Ok(arg.parse()?),
        None => Err(ShellErrorKind::TooFewArguments {
            name,
            expected: 1,
            received: 0,
        }),
    }
}
