//! `#[derive(Algebraic)]`: read the sum-of-products shape off an `enum` or `struct`.

#![allow(
    clippy::missing_inline_in_public_items,
    reason = "macros are the only public items"
)]
#![allow(
    clippy::missing_docs_in_private_items,
    clippy::single_call_fn,
    reason = "writing macros is already hell"
)]

use {
    proc_macro::TokenStream,
    proc_macro2::{Span, TokenStream as TokenStream2},
    quote::{quote, quote_spanned},
    syn::{
        Fields, GenericParam, Generics, Ident, Item, ItemEnum, ItemStruct, Path, PathArguments,
        PathSegment, Token, TraitBound, TraitBoundModifier, Type, TypeParamBound, TypePath,
        parse_macro_input,
        spanned::Spanned as _,
        visit::{Visit, visit_type_path},
    },
};

/// Finds the first mention of the type being derived (or `Self`) among field types,
/// by name or by any path ending in that name (`crate::List`).
struct MentionsSelf<'i> {
    ident: &'i Ident,
    found: Option<Span>,
}

#[expect(clippy::missing_trait_methods, reason = "infeasible")]
impl<'ast> Visit<'ast> for MentionsSelf<'_> {
    #[inline]
    fn visit_type_path(&mut self, i: &'ast TypePath) {
        if self.found.is_some() {
            return;
        }
        if i.qself.is_none()
            && let (Some(head), Some(tail)) = (i.path.segments.first(), i.path.segments.last())
            && (head.ident == "Self" || head.ident == *self.ident || tail.ident == *self.ident)
        {
            self.found = Some(i.span());
            return;
        }
        visit_type_path(self, i);
    }
}

/// Implement `Algebraic` as the sum of the variants, each the product of its fields.
///
/// Direct self-reference is a compile error. Mutual recursion through
/// another type is not detected: its `type_expr()` never returns.
#[proc_macro_derive(Algebraic)]
pub fn derive_algebraic(ts: TokenStream) -> TokenStream {
    let expanded = match parse_macro_input!(ts as Item) {
        Item::Enum(ref item) => derive_algebraic_for_enum(item),
        Item::Struct(ref item) => derive_algebraic_for_struct(item),
        ref other => {
            syn::Error::new(other.span(), "expected an `enum` or a `struct`").to_compile_error()
        }
    };
    expanded.into()
}

#[inline]
fn derive_algebraic_for_enum(item: &ItemEnum) -> TokenStream2 {
    let ItemEnum {
        ref ident,
        ref generics,
        ref variants,
        ..
    } = *item;

    if let Some(error) = reject_recursion(ident, variants.iter().flat_map(|v| v.fields.iter())) {
        return error;
    }

    let body = right_nested(
        variants.iter().map(|variant| product_of_fields(&variant.fields)),
        &quote! { ::tyalg::expr::TypeExpr::Zero },
        &id("sum"),
    );
    implement(ident, generics, &body)
}

#[inline]
fn derive_algebraic_for_struct(item: &ItemStruct) -> TokenStream2 {
    let ItemStruct {
        ref ident,
        ref generics,
        ref fields,
        ..
    } = *item;

    if let Some(error) = reject_recursion(ident, fields.iter()) {
        return error;
    }

    let body = product_of_fields(fields);
    implement(ident, generics, &body)
}

/// A recursive type has no finite cardinality to speak of.
#[inline]
fn reject_recursion<'f, I: Iterator<Item = &'f syn::Field>>(
    ident: &Ident,
    fields: I,
) -> Option<TokenStream2> {
    let mut visitor = MentionsSelf { ident, found: None };
    for field in fields {
        let () = visitor.visit_type(&field.ty);
    }
    let span = visitor.found?;
    Some(quote_spanned! { span =>
        ::core::compile_error!("`Algebraic` types must be finite, so they cannot contain themselves");
    })
}

#[inline]
fn implement(ident: &Ident, generics: &Generics, body: &TokenStream2) -> TokenStream2 {
    let algebraic = Path {
        leading_colon: Some(<Token![::]>::default()),
        segments: [seg(id("tyalg")), seg(id("algebraic")), seg(id("Algebraic"))]
            .into_iter()
            .collect(),
    };
    let generics = add_extra_bound(
        generics.clone(),
        &TypeParamBound::Trait(TraitBound {
            paren_token: None,
            modifier: TraitBoundModifier::None,
            lifetimes: None,
            path: algebraic.clone(),
        }),
    );
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #algebraic for #ident #ty_generics #where_clause {
            #[inline]
            fn type_expr() -> ::tyalg::expr::TypeExpr {
                #body
            }
        }
    }
}

/// `One` for no fields, the lone field's type for one,
/// otherwise a right-nested product (as for tuples).
#[inline]
fn product_of_fields(fields: &Fields) -> TokenStream2 {
    right_nested(
        fields.iter().map(|field| type_expr_of(&field.ty)),
        &quote! { ::tyalg::expr::TypeExpr::One },
        &id("product"),
    )
}

#[inline]
fn type_expr_of(ty: &Type) -> TokenStream2 {
    quote! { <#ty as ::tyalg::algebraic::Algebraic>::type_expr() }
}

/// Fold `a, b, c` into `op(a, op(b, c))`, or `unit` if there is nothing to fold.
#[inline]
fn right_nested<I: DoubleEndedIterator<Item = TokenStream2>>(
    terms: I,
    unit: &TokenStream2,
    op: &Ident,
) -> TokenStream2 {
    let mut terms = terms.rev();
    let Some(last) = terms.next() else {
        return unit.clone();
    };
    terms.fold(last, |acc, term| {
        quote! { ::tyalg::expr::TypeExpr::#op(#term, #acc) }
    })
}

#[inline]
fn add_extra_bound(mut generics: Generics, extra_bound: &TypeParamBound) -> Generics {
    for param in &mut generics.params {
        if let GenericParam::Type(ref mut ty) = *param {
            let () = ty.bounds.push(extra_bound.clone());
        }
    }
    generics
}

#[inline]
fn id(str: &str) -> Ident {
    Ident::new(str, Span::call_site())
}

#[inline]
fn seg(ident: Ident) -> PathSegment {
    PathSegment {
        ident,
        arguments: PathArguments::None,
    }
}

#[cfg(test)]
mod test {
    use {super::*, core::iter, syn::parse_quote};

    fn normalized(ts: &TokenStream2) -> String {
        ts.to_string().split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn right_nesting() {
        let terms = ["a", "b", "c"].map(|s| {
            let i = id(s);
            quote! { #i }
        });
        let nested = right_nested(terms.into_iter(), &quote! { unit }, &id("sum"));
        let expected = quote! {
            ::tyalg::expr::TypeExpr::sum(a, ::tyalg::expr::TypeExpr::sum(b, c))
        };
        pretty_assertions::assert_eq!(normalized(&nested), normalized(&expected));
    }

    #[test]
    fn nothing_to_nest_is_the_unit() {
        let nested = right_nested(iter::empty(), &quote! { unit }, &id("sum"));
        pretty_assertions::assert_eq!(nested.to_string(), "unit");
    }

    #[test]
    fn recursion_is_rejected() {
        let item: ItemEnum = parse_quote! {
            enum Peano {
                O,
                S(Box<Self>),
            }
        };
        assert!(
            reject_recursion(
                &item.ident,
                item.variants.iter().flat_map(|v| v.fields.iter())
            )
            .is_some()
        );

        let item: ItemStruct = parse_quote! {
            struct List(Option<Box<List>>);
        };
        assert!(reject_recursion(&item.ident, item.fields.iter()).is_some());

        let item: ItemStruct = parse_quote! {
            struct Tree {
                children: [Option<Box<crate::trees::Tree>>; 2],
            }
        };
        assert!(reject_recursion(&item.ident, item.fields.iter()).is_some());

        let item: ItemStruct = parse_quote! {
            struct Pair<A>(A, bool);
        };
        assert!(reject_recursion(&item.ident, item.fields.iter()).is_none());
    }
}
