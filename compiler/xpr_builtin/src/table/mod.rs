//! The process-wide built-in table.

use std::sync::{Arc, OnceLock};

use xpr_types::{Signature, Type};

use crate::Function;

static BUILTINS: OnceLock<Vec<Arc<Function>>> = OnceLock::new();

/// All built-in functions (lazily initialized, never mutated).
pub fn builtins() -> &'static [Arc<Function>] {
    BUILTINS.get_or_init(build)
}

/// Find a built-in by name.
pub fn lookup(name: &str) -> Option<&'static Arc<Function>> {
    builtins().iter().find(|f| f.name == name)
}

fn sig(inputs: &[Type], output: Type) -> Signature {
    Signature::returning(inputs.to_vec(), output)
}

fn build() -> Vec<Arc<Function>> {
    use Type::{Any, Bool, Float, Int, String as Str};

    let strings = Type::array(Str);
    let any_list = Type::array(Any);

    let table = vec![
        Function::new("len", vec![sig(&[Any], Int)]),
        Function::new("abs", vec![sig(&[Int], Int), sig(&[Float], Float)]),
        Function::new("int", vec![sig(&[Any], Int)]),
        Function::new("float", vec![sig(&[Any], Float)]),
        Function::new("string", vec![sig(&[Any], Str)]),
        Function::new("trim", vec![sig(&[Str], Str), sig(&[Str, Str], Str)]),
        Function::new("trimPrefix", vec![sig(&[Str, Str], Str)]),
        Function::new("trimSuffix", vec![sig(&[Str, Str], Str)]),
        Function::new("upper", vec![sig(&[Str], Str)]),
        Function::new("lower", vec![sig(&[Str], Str)]),
        Function::new(
            "split",
            vec![
                sig(&[Str, Str], strings.clone()),
                sig(&[Str, Str, Int], strings.clone()),
            ],
        ),
        Function::new(
            "join",
            vec![sig(&[strings.clone()], Str), sig(&[strings, Str], Str)],
        ),
        Function::new("repeat", vec![sig(&[Str, Int], Str)]),
        Function::new("indexOf", vec![sig(&[Str, Str], Int)]),
        Function::new("lastIndexOf", vec![sig(&[Str, Str], Int)]),
        Function::new("hasPrefix", vec![sig(&[Str, Str], Bool)]),
        Function::new("hasSuffix", vec![sig(&[Str, Str], Bool)]),
        Function::new("max", vec![sig(&[any_list.clone()], Any).variadic()]),
        Function::new("min", vec![sig(&[any_list], Any).variadic()]),
    ];

    table.into_iter().map(Arc::new).collect()
}
