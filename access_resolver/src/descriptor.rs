use std::iter::Peekable;
use std::str::Chars;
use anyhow::{anyhow, bail, Context, Result};

/// Represents the type of a field, a method parameter or a method return value.
///
/// ```
/// use access_resolver::descriptor::Type;
///
/// // the type of a java `boolean[][]`
/// let t = Type::parse("[[Z").unwrap();
/// assert_eq!(t, Type::Array(2, Box::new(Type::Z)));
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Type {
	/// A `byte`.
	B,
	/// A `char`.
	C,
	/// A `double`.
	D,
	/// A `float`.
	F,
	/// An `int`.
	I,
	/// A `long`.
	J,
	/// A `short`.
	S,
	/// A `boolean`.
	Z,
	/// An instance of the class with the given internal name, like `java/lang/String`.
	Object(String),
	/// An array type, represented by the dimension and the element type.
	///
	/// The element type is never itself an array.
	Array(u8, Box<Type>),
}

impl Type {
	/// Parses a field descriptor, like `J` or `Ljava/lang/String;`.
	pub fn parse(descriptor: &str) -> Result<Type> {
		let mut chars = descriptor.chars().peekable();
		let t = read_field_type(&mut chars)
			.with_context(|| anyhow!("invalid field descriptor {descriptor:?}"))?;
		if let Some(x) = chars.next() {
			bail!("trailing char {x:?} in field descriptor {descriptor:?}");
		}
		Ok(t)
	}

	/// Only the primitive `boolean` counts, `java/lang/Boolean` doesn't.
	pub fn is_boolean(&self) -> bool {
		matches!(self, Type::Z)
	}
}

/// The parameter types and return type of a method.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MethodDescriptor {
	pub parameters: Vec<Type>,
	/// [`None`] for `void`.
	pub return_type: Option<Type>,
}

impl MethodDescriptor {
	/// Parses a method descriptor, like `()V` or `(ILjava/lang/Object;)Z`.
	///
	/// ```
	/// use access_resolver::descriptor::{MethodDescriptor, Type};
	///
	/// let d = MethodDescriptor::parse("()Ljava/lang/String;").unwrap();
	/// assert!(d.parameters.is_empty());
	/// assert_eq!(d.return_type, Some(Type::Object("java/lang/String".to_owned())));
	///
	/// assert!(MethodDescriptor::parse("(V)V").is_err());
	/// ```
	pub fn parse(descriptor: &str) -> Result<MethodDescriptor> {
		read_method_descriptor(&mut descriptor.chars().peekable())
			.with_context(|| anyhow!("invalid method descriptor {descriptor:?}"))
	}

	pub fn is_void(&self) -> bool {
		self.return_type.is_none()
	}
}

// The grammar for descriptors is:
//   FieldDescriptor:
//     FieldType
//
//   MethodDescriptor:
//     "(" FieldType* ")" ReturnDescriptor
//
//   ReturnDescriptor:
//     FieldType | "V"
//
//   FieldType:
//     "B" | "C" | "D" | "F" | "I" | "J" | "S" | "Z" |
//     "L" ClassName ";" |
//     "[" FieldType
fn read_field_type(chars: &mut Peekable<Chars>) -> Result<Type> {
	let mut array_dimension: u8 = 0;
	while chars.next_if_eq(&'[').is_some() {
		array_dimension = array_dimension.checked_add(1)
			.ok_or_else(|| anyhow!("array dimension of more than 255"))?;
	}

	let char = chars.next().ok_or_else(|| anyhow!("unexpected abrupt ending of descriptor"))?;
	let element = match char {
		'B' => Type::B,
		'C' => Type::C,
		'D' => Type::D,
		'F' => Type::F,
		'I' => Type::I,
		'J' => Type::J,
		'S' => Type::S,
		'Z' => Type::Z,
		'L' => {
			let mut class_name = String::new();
			loop {
				match chars.next() {
					Some(';') => break,
					Some(char) => class_name.push(char),
					None => bail!("unexpected abrupt ending of descriptor"),
				}
			}
			if class_name.is_empty() {
				bail!("empty class name in descriptor");
			}
			Type::Object(class_name)
		},
		x => bail!("unexpected char {x:?} in descriptor"),
	};

	if array_dimension == 0 {
		Ok(element)
	} else {
		Ok(Type::Array(array_dimension, Box::new(element)))
	}
}

fn read_method_descriptor(chars: &mut Peekable<Chars>) -> Result<MethodDescriptor> {
	if chars.next_if_eq(&'(').is_none() {
		bail!("method descriptor must start with '('");
	}

	let mut parameters = Vec::new();
	while chars.next_if_eq(&')').is_none() {
		parameters.push(read_field_type(chars)?);
	}

	let return_type = if chars.next_if_eq(&'V').is_some() {
		None
	} else {
		Some(read_field_type(chars)?)
	};

	if let Some(x) = chars.next() {
		bail!("trailing char {x:?} after return type");
	}

	Ok(MethodDescriptor { parameters, return_type })
}
