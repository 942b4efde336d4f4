/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, ItemStruct, Path};

/// Annotate a request struct with the type of the response it produces, and
/// implement the operation traits for both.
///
/// Both types are named on the wire after their Rust identifiers, so a struct
/// `FooRequest` annotated with `#[operation_response(FooResponse)]` is written
/// as `<FooRequest>` and expects a `<FooResponse>` back. The response type must
/// be in scope where the request is declared.
#[proc_macro_attribute]
pub fn operation_response(attr: TokenStream, annotated_item: TokenStream) -> TokenStream {
    let response_type = parse_macro_input!(attr as Path);
    let input_struct = parse_macro_input!(annotated_item as ItemStruct);

    let request_name = input_struct.ident.clone();
    let response_name = match response_type.segments.last() {
        Some(segment) => segment.ident.clone(),
        None => {
            return syn::Error::new_spanned(&response_type, "expected a response type name")
                .to_compile_error()
                .into();
        }
    };

    let expanded = quote! {
        #input_struct

        impl crate::Operation for #request_name {
            type Response = #response_type;
        }

        impl crate::types::sealed::EnvelopeBodyContents for #request_name {
            const NAME: &'static str = stringify!(#request_name);
            const NAMESPACE: &'static str = crate::MAIL_NS_URI;
        }

        impl crate::OperationResponse for #response_type {}

        impl crate::types::sealed::EnvelopeBodyContents for #response_type {
            const NAME: &'static str = stringify!(#response_name);
            const NAMESPACE: &'static str = crate::MAIL_NS_URI;
        }
    };

    TokenStream::from(expanded)
}
