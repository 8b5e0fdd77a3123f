use proc_macro2::TokenStream as TokenStream2;
use syn::{parse_quote, Data, DataStruct, DeriveInput, Field, Fields, Generics, Path, Type};

/// Resolves the path to the `trek` crate.
///
/// Inside `trek` itself the wrapper is marked with `#[trek_crate]` and the
/// path becomes `crate`.
pub fn get_trek_path(input: &DeriveInput) -> Path {
    let is_trek_crate = input
        .attrs
        .iter()
        .any(|attr| attr.path.is_ident("trek_crate"));

    if is_trek_crate {
        parse_quote! { crate }
    } else {
        parse_quote! { ::trek }
    }
}

pub fn get_graph_field(input: &DeriveInput) -> &Field {
    let field = match input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(ref fields),
            ..
        }) => fields
            .named
            .iter()
            .find(|field| field.attrs.iter().any(|attr| attr.path.is_ident("graph"))),
        _ => panic!("unsupported type (use struct with named fields)"),
    };

    field.expect("#[graph] attribute is required on exactly one field")
}

/// Copies the generics of the wrapper and requires the graph field type to
/// implement `bound`.
pub fn bounded_generics(input: &DeriveInput, field_type: &Type, bound: TokenStream2) -> Generics {
    let mut generics = input.generics.clone();
    generics
        .make_where_clause()
        .predicates
        .push(parse_quote! { #field_type: #bound });
    generics
}
