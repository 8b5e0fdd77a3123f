//! Derive macros delegating the `trek` graph traits to a wrapped graph.
//!
//! The wrapper must be a struct with named fields, one of which is marked
//! with `#[graph]`. All trait methods are forwarded to that field.

mod util;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

#[proc_macro_derive(GraphBase, attributes(graph, trek_crate))]
pub fn graph_base(tokens: TokenStream) -> TokenStream {
    let input = parse_macro_input!(tokens as DeriveInput);

    let trek = util::get_trek_path(&input);

    let name = &input.ident;
    let field = util::get_graph_field(&input);

    let field_name = field.ident.as_ref().unwrap();
    let field_type = &field.ty;

    let generics =
        util::bounded_generics(&input, field_type, quote! { #trek::core::GraphBase });
    let (impl_generics, _, where_clause) = generics.split_for_impl();
    let (_, ty_generics, _) = input.generics.split_for_impl();

    let implemented = quote! {
        impl #impl_generics #trek::core::GraphBase for #name #ty_generics #where_clause {
            type VertexId = <#field_type as #trek::core::GraphBase>::VertexId;

            fn vertex_count_hint(&self) -> Option<usize> {
                <#field_type as #trek::core::GraphBase>::vertex_count_hint(&self.#field_name)
            }
        }
    };

    TokenStream::from(implemented)
}

#[proc_macro_derive(Neighbors, attributes(graph, trek_crate))]
pub fn neighbors(tokens: TokenStream) -> TokenStream {
    let input = parse_macro_input!(tokens as DeriveInput);

    let trek = util::get_trek_path(&input);

    let name = &input.ident;
    let field = util::get_graph_field(&input);

    let field_name = field.ident.as_ref().unwrap();
    let field_type = &field.ty;

    let generics = util::bounded_generics(&input, field_type, quote! { #trek::core::Neighbors });
    let (impl_generics, _, where_clause) = generics.split_for_impl();
    let (_, ty_generics, _) = input.generics.split_for_impl();

    let implemented = quote! {
        impl #impl_generics #trek::core::Neighbors for #name #ty_generics #where_clause {
            type NeighborsIter<'a> = <#field_type as #trek::core::Neighbors>::NeighborsIter<'a>
            where
                Self: 'a;

            fn neighbors(&self, from: &Self::VertexId) -> Self::NeighborsIter<'_> {
                <#field_type as #trek::core::Neighbors>::neighbors(&self.#field_name, from)
            }

            fn degree(&self, id: &Self::VertexId) -> usize {
                <#field_type as #trek::core::Neighbors>::degree(&self.#field_name, id)
            }

            fn has_neighbor(&self, from: &Self::VertexId, to: &Self::VertexId) -> bool {
                <#field_type as #trek::core::Neighbors>::has_neighbor(&self.#field_name, from, to)
            }
        }
    };

    TokenStream::from(implemented)
}

#[proc_macro_derive(VertexSet, attributes(graph, trek_crate))]
pub fn vertex_set(tokens: TokenStream) -> TokenStream {
    let input = parse_macro_input!(tokens as DeriveInput);

    let trek = util::get_trek_path(&input);

    let name = &input.ident;
    let field = util::get_graph_field(&input);

    let field_name = field.ident.as_ref().unwrap();
    let field_type = &field.ty;

    let generics = util::bounded_generics(&input, field_type, quote! { #trek::core::VertexSet });
    let (impl_generics, _, where_clause) = generics.split_for_impl();
    let (_, ty_generics, _) = input.generics.split_for_impl();

    let implemented = quote! {
        impl #impl_generics #trek::core::VertexSet for #name #ty_generics #where_clause {
            type VertexIdsIter<'a> = <#field_type as #trek::core::VertexSet>::VertexIdsIter<'a>
            where
                Self: 'a;

            fn vertex_ids(&self) -> Self::VertexIdsIter<'_> {
                <#field_type as #trek::core::VertexSet>::vertex_ids(&self.#field_name)
            }

            fn vertex_count(&self) -> usize {
                <#field_type as #trek::core::VertexSet>::vertex_count(&self.#field_name)
            }

            fn contains_vertex(&self, id: &Self::VertexId) -> bool {
                <#field_type as #trek::core::VertexSet>::contains_vertex(&self.#field_name, id)
            }
        }
    };

    TokenStream::from(implemented)
}

#[proc_macro_derive(Vertices, attributes(graph, trek_crate))]
pub fn vertices(tokens: TokenStream) -> TokenStream {
    let input = parse_macro_input!(tokens as DeriveInput);

    let trek = util::get_trek_path(&input);

    let name = &input.ident;
    let field = util::get_graph_field(&input);

    let field_name = field.ident.as_ref().unwrap();
    let field_type = &field.ty;

    let generics = util::bounded_generics(&input, field_type, quote! { #trek::core::Vertices });
    let (impl_generics, _, where_clause) = generics.split_for_impl();
    let (_, ty_generics, _) = input.generics.split_for_impl();

    let implemented = quote! {
        impl #impl_generics #trek::core::Vertices for #name #ty_generics #where_clause {
            type Vertex = <#field_type as #trek::core::Vertices>::Vertex;

            fn vertex(&self, id: &Self::VertexId) -> Option<&Self::Vertex> {
                <#field_type as #trek::core::Vertices>::vertex(&self.#field_name, id)
            }
        }
    };

    TokenStream::from(implemented)
}
