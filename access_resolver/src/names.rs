//! JavaBeans naming conventions for accessor methods.

use crate::descriptor::MethodDescriptor;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GetterPrefix {
	Get,
	Is,
}

/// Lower cases the first char, unless the first two chars are both upper case.
///
/// This way `Name` becomes `name`, but `URL` stays `URL`.
pub(crate) fn decapitalize(name: &str) -> String {
	let mut chars = name.chars();
	match (chars.next(), chars.next()) {
		(Some(first), Some(second)) if first.is_uppercase() && second.is_uppercase() => name.to_owned(),
		(Some(first), _) => first.to_lowercase()
			.chain(name[first.len_utf8()..].chars())
			.collect(),
		(None, _) => String::new(),
	}
}

/// Returns the attribute name if the method is a getter: no parameters, not returning `void`,
/// and named `getX`, or `isX` when returning a `boolean`.
pub(crate) fn getter_attribute(method_name: &str, descriptor: &MethodDescriptor) -> Option<(String, GetterPrefix)> {
	if !descriptor.parameters.is_empty() {
		return None;
	}
	let return_type = descriptor.return_type.as_ref()?;

	if let Some(rest) = method_name.strip_prefix("get").filter(|rest| !rest.is_empty()) {
		return Some((decapitalize(rest), GetterPrefix::Get));
	}
	if return_type.is_boolean() {
		if let Some(rest) = method_name.strip_prefix("is").filter(|rest| !rest.is_empty()) {
			return Some((decapitalize(rest), GetterPrefix::Is));
		}
	}
	None
}

/// Returns the attribute name if the method is a setter: a single parameter, returning `void`,
/// and named `setX`.
pub(crate) fn setter_attribute(method_name: &str, descriptor: &MethodDescriptor) -> Option<String> {
	if descriptor.parameters.len() != 1 || !descriptor.is_void() {
		return None;
	}
	method_name.strip_prefix("set")
		.filter(|rest| !rest.is_empty())
		.map(decapitalize)
}

#[cfg(test)]
mod testing {
	use anyhow::Result;
	use pretty_assertions::assert_eq;
	use crate::descriptor::MethodDescriptor;
	use crate::names::{decapitalize, getter_attribute, setter_attribute, GetterPrefix};

	#[test]
	fn decapitalize_names() {
		assert_eq!(decapitalize("Name"), "name");
		assert_eq!(decapitalize("X"), "x");
		assert_eq!(decapitalize("URL"), "URL");
		assert_eq!(decapitalize("IOStream"), "IOStream");
		assert_eq!(decapitalize("isbn"), "isbn");
		assert_eq!(decapitalize("Ärger"), "ärger");
		assert_eq!(decapitalize(""), "");
	}

	#[test]
	fn getters() -> Result<()> {
		let string = MethodDescriptor::parse("()Ljava/lang/String;")?;
		let boolean = MethodDescriptor::parse("()Z")?;
		let boxed_boolean = MethodDescriptor::parse("()Ljava/lang/Boolean;")?;
		let void = MethodDescriptor::parse("()V")?;
		let with_parameter = MethodDescriptor::parse("(I)Ljava/lang/String;")?;

		assert_eq!(getter_attribute("getIsbn", &string), Some(("isbn".to_owned(), GetterPrefix::Get)));
		assert_eq!(getter_attribute("getURL", &string), Some(("URL".to_owned(), GetterPrefix::Get)));
		assert_eq!(getter_attribute("isActive", &boolean), Some(("active".to_owned(), GetterPrefix::Is)));
		assert_eq!(getter_attribute("getActive", &boolean), Some(("active".to_owned(), GetterPrefix::Get)));

		assert_eq!(getter_attribute("isActive", &boxed_boolean), None); // only primitive boolean
		assert_eq!(getter_attribute("isbn", &string), None);
		assert_eq!(getter_attribute("get", &string), None);
		assert_eq!(getter_attribute("is", &boolean), None);
		assert_eq!(getter_attribute("getNothing", &void), None);
		assert_eq!(getter_attribute("getTitle", &with_parameter), None);
		assert_eq!(getter_attribute("title", &string), None);

		Ok(())
	}

	#[test]
	fn setters() -> Result<()> {
		let one = MethodDescriptor::parse("(Ljava/lang/String;)V")?;
		let two = MethodDescriptor::parse("(II)V")?;
		let returning = MethodDescriptor::parse("(I)Ljava/lang/Object;")?;

		assert_eq!(setter_attribute("setTitle", &one), Some("title".to_owned()));
		assert_eq!(setter_attribute("set", &one), None);
		assert_eq!(setter_attribute("setRange", &two), None);
		assert_eq!(setter_attribute("setTitle", &returning), None); // builder style isn't a setter
		assert_eq!(setter_attribute("title", &one), None);

		Ok(())
	}
}
