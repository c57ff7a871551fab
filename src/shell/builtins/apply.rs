use crate::shell::{command::Arity, error::ShellErrorKind, registry::CommandRegistry};

/// Map a registered command over the tail of the argument list.
///
/// `args[0]` names the target. With a declared arity of k >= 2 the next
/// k - 1 arguments are fixed and bound to every invocation; the rest are
/// mapped, each one prepended to the fixed arguments for one invocation of
/// the target. A target with arity 0 or 1 has no fixed arguments and maps
/// everything after its name; a variadic target maps nothing. Each
/// invocation contributes the first element of its result, if any.
pub fn apply(registry: &CommandRegistry, args: &[String]) -> Result<Vec<String>, ShellErrorKind> {
    let Some(name) = args.first() else {
        return Err(ShellErrorKind::TooFewArguments {
            name: "apply",
            expected: 1,
            received: 0,
        });
    };
    let Some(target) = registry.resolve(name) else {
        // the miss already printed its suggestions
        return Ok(Vec::new());
    };

    let (fixed, mapped): (&[String], &[String]) = match target.arity() {
        Arity::Exact(count) if count >= 2 => (
            &args[1..count.min(args.len())],
            args.get(count..).unwrap_or_default(),
        ),
        Arity::Exact(_) => (&[], &args[1..]),
        Arity::Variadic => (&[], &[]),
    };

    let mut results = Vec::new();
    for argument in mapped {
        let mut invocation = Vec::with_capacity(fixed.len() + 1);
        invocation.push(argument.clone());
        invocation.extend_from_slice(fixed);

        let output = target.invoke(registry, &invocation)?;
        if let Some(first) = output.into_iter().next() {
            results.push(first);
        }
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::builtins::register_builtins;

    fn args(words: &[&str]) -> Vec<String> {
        words.iter().map(|word| word.to_string()).collect()
    }

    fn registry() -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry);
        registry
    }

    #[test]
    fn maps_a_partially_applied_binary_command() {
        let registry = registry();
        let result = apply(&registry, &args(&["add", "10", "1", "2", "3"])).unwrap();
        assert_eq!(result, ["11", "12", "13"]);
    }

    #[test]
    fn unary_target_maps_every_trailing_argument() {
        let registry = registry();
        let result = apply(&registry, &args(&["hex", "10", "255"])).unwrap();
        assert_eq!(result, ["0xa", "0xff"]);
    }

    #[test]
    fn nullary_target_is_never_fed_its_own_name() {
        use crate::shell::command::Command;

        fn probe(_: &CommandRegistry, args: &[String]) -> Result<Vec<String>, ShellErrorKind> {
            Ok(vec![format!("got {}", args.len())])
        }

        let mut registry = CommandRegistry::new();
        registry.register(Command::new("probe", Arity::Exact(0), probe));
        let result = apply(&registry, &args(&["probe", "x", "y"])).unwrap();
        // one invocation per mapped argument, none of them "probe" itself
        assert_eq!(result, ["got 1", "got 1"]);
    }

    #[test]
    fn variadic_target_maps_nothing() {
        let registry = registry();
        let result = apply(&registry, &args(&["apply", "add", "1", "2"])).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn unknown_target_produces_an_empty_result() {
        let registry = registry();
        let result = apply(&registry, &args(&["zzz", "1", "2"])).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn empty_invocation_results_are_skipped() {
        let registry = registry();
        // echo prints and returns nothing, so apply collects nothing
        let result = apply(&registry, &args(&["echo", "a", "b"])).unwrap();
        assert!(result.is_empty());
    }
}
