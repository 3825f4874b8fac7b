//! Renders field types back to source text.
//!
//! The text is what generated setters and matchers take as their value
//! type, so only shapes that read back unambiguously are accepted.

use quote::ToTokens;
use syn::{
    AngleBracketedGenericArguments, Expr, GenericArgument, Lit, Path, PathArguments, Type,
};
use thiserror::Error;

/// Why a type could not be rendered.
#[derive(Debug, Error)]
pub enum TypeError {
    /// The type has a shape with no textual rendering here.
    #[error("unsupported type `{0}`")]
    Unsupported(String),

    /// A component of a larger type was rejected.
    #[error("{context}: {source}")]
    Nested {
        /// Which component failed.
        context: &'static str,
        /// The component's failure.
        #[source]
        source: Box<TypeError>,
    },
}

impl TypeError {
    fn unsupported(tokens: &impl ToTokens) -> Self {
        Self::Unsupported(tokens.to_token_stream().to_string())
    }
}

fn nested<T>(context: &'static str, result: Result<T, TypeError>) -> Result<T, TypeError> {
    result.map_err(|source| TypeError::Nested {
        context,
        source: Box::new(source),
    })
}

/// Renders `ty` as source text.
pub(crate) fn type_name(ty: &Type) -> Result<String, TypeError> {
    match ty {
        Type::Path(path) if path.qself.is_none() => path_name(&path.path),
        Type::Reference(reference) => {
            let inner = nested("reference type", type_name(&reference.elem))?;
            let lifetime = reference
                .lifetime
                .as_ref()
                .map_or_else(String::new, |lifetime| format!("{lifetime} "));
            let mutability = if reference.mutability.is_some() { "mut " } else { "" };
            Ok(format!("&{lifetime}{mutability}{inner}"))
        }
        Type::Ptr(pointer) => {
            let inner = nested("pointer type", type_name(&pointer.elem))?;
            let mutability = if pointer.mutability.is_some() { "mut" } else { "const" };
            Ok(format!("*{mutability} {inner}"))
        }
        Type::Slice(slice) => Ok(format!("[{}]", nested("slice type", type_name(&slice.elem))?)),
        Type::Array(array) => {
            let inner = nested("array type", type_name(&array.elem))?;
            let len = nested("array length", length(&array.len))?;
            Ok(format!("[{inner}; {len}]"))
        }
        Type::Tuple(tuple) => {
            let elems = tuple
                .elems
                .iter()
                .map(|elem| nested("tuple element", type_name(elem)))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(match elems.as_slice() {
                [single] => format!("({single},)"),
                _ => format!("({})", elems.join(", ")),
            })
        }
        Type::Paren(paren) => Ok(format!("({})", nested("parenthesised type", type_name(&paren.elem))?)),
        Type::Group(group) => type_name(&group.elem),
        other => Err(TypeError::unsupported(other)),
    }
}

fn path_name(path: &Path) -> Result<String, TypeError> {
    let segments = path
        .segments
        .iter()
        .map(|segment| {
            let args = match &segment.arguments {
                PathArguments::None => String::new(),
                PathArguments::AngleBracketed(args) => nested("generic argument", generic_args(args))?,
                PathArguments::Parenthesized(args) => return Err(TypeError::unsupported(args)),
            };
            Ok(format!("{}{args}", segment.ident))
        })
        .collect::<Result<Vec<_>, TypeError>>()?;
    let leading = if path.leading_colon.is_some() { "::" } else { "" };
    Ok(format!("{leading}{}", segments.join("::")))
}

fn generic_args(args: &AngleBracketedGenericArguments) -> Result<String, TypeError> {
    let rendered = args
        .args
        .iter()
        .map(|arg| match arg {
            GenericArgument::Lifetime(lifetime) => Ok(lifetime.to_string()),
            GenericArgument::Type(ty) => type_name(ty),
            GenericArgument::Const(expr) => length(expr),
            GenericArgument::AssocType(assoc) => {
                if assoc.generics.is_some() {
                    return Err(TypeError::unsupported(assoc));
                }
                Ok(format!("{} = {}", assoc.ident, type_name(&assoc.ty)?))
            }
            other => Err(TypeError::unsupported(other)),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(format!("<{}>", rendered.join(", ")))
}

fn length(expr: &Expr) -> Result<String, TypeError> {
    match expr {
        Expr::Lit(lit) => match &lit.lit {
            Lit::Int(int) => Ok(int.to_string()),
            other => Err(TypeError::unsupported(other)),
        },
        Expr::Path(path) if path.qself.is_none() => path_name(&path.path),
        other => Err(TypeError::unsupported(other)),
    }
}
