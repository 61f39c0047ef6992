use netswap::{Error, LongWidth, Options, generate, generate_str};

const MIXED: &str = "\
struct Mixed {
  char c;               // copied as-is
  unsigned short s;
  int i[4];
  long l:16;
  long li:16;
  unsigned long long ll:20;
  signed long long lli:10;
  float f;
};
";

#[test]
fn mixed_structure() {
  let got = generate_str(MIXED, &Options::default()).unwrap();
  let want = [
    "void ReverseMixedToLittleEndian(Mixed* p)",
    "{",
    "    p->s = ntohs(p->s);",
    "    for (size_t n = 0; n < sizeof(p->i) / sizeof(p->i[0]); ++n)",
    "        p->i[n] = ntohl(p->i[n]);",
    "    *(long*)((char*)&p->i + sizeof(p->i)) = ntohl(*(long*)((char*)&p->i + sizeof(p->i)));",
    "    *(unsigned long long*)((char*)&p->i + sizeof(p->i) + 4) = ntohll(*(unsigned long long*)((char*)&p->i + sizeof(p->i) + 4));",
    "    *(signed long long*)((char*)&p->i + sizeof(p->i) + 12) = ntohll(*(signed long long*)((char*)&p->i + sizeof(p->i) + 12));",
    "    p->f = ntohf(p->f);",
    "}",
    "",
    "void ReverseMixedToBigEndian(Mixed* p)",
    "{",
    "    p->s = htons(p->s);",
    "    for (size_t n = 0; n < sizeof(p->i) / sizeof(p->i[0]); ++n)",
    "        p->i[n] = htonl(p->i[n]);",
    "    *(long*)((char*)&p->i + sizeof(p->i)) = htonl(*(long*)((char*)&p->i + sizeof(p->i)));",
    "    *(unsigned long long*)((char*)&p->i + sizeof(p->i) + 4) = htonll(*(unsigned long long*)((char*)&p->i + sizeof(p->i) + 4));",
    "    *(signed long long*)((char*)&p->i + sizeof(p->i) + 12) = htonll(*(signed long long*)((char*)&p->i + sizeof(p->i) + 12));",
    "    p->f = htonf(p->f);",
    "}",
  ];
  assert_eq!(got, want);
}

#[test]
fn no_throw_annotation() {
  let opts = Options { no_throw: true, ..Default::default() };
  let got = generate_str("struct S { int i; };", &opts).unwrap();
  assert_eq!(got[0], "void ReverseSToLittleEndian(S* p) noexcept");
  assert_eq!(got[5], "void ReverseSToBigEndian(S* p) noexcept");
}

#[test]
fn offset_resets_at_each_ordinary_member() {
  let src = "struct R { short a; int x:3; int y:3; short b; short z:2; int w:1; };";
  let got = generate_str(src, &Options::default()).unwrap();
  assert_eq!(
    &got[2..7],
    [
      "    p->a = ntohs(p->a);",
      "    *(int*)((char*)&p->a + sizeof(p->a)) = ntohl(*(int*)((char*)&p->a + sizeof(p->a)));",
      "    p->b = ntohs(p->b);",
      "    *(short*)((char*)&p->b + sizeof(p->b)) = ntohs(*(short*)((char*)&p->b + sizeof(p->b)));",
      "    *(int*)((char*)&p->b + sizeof(p->b) + 2) = ntohl(*(int*)((char*)&p->b + sizeof(p->b) + 2));",
    ]
  );
}

#[test]
fn leading_bit_fields_use_struct_address() {
  let got = generate_str("struct B { unsigned int a:4; unsigned int b:4; short c:3; int d; };", &Options::default()).unwrap();
  assert_eq!(got[2], "    *(unsigned int*)((char*)p) = ntohl(*(unsigned int*)((char*)p));");
  assert_eq!(got[3], "    *(short*)((char*)p + 4) = ntohs(*(short*)((char*)p + 4));");
  assert_eq!(got[4], "    p->d = ntohl(p->d);");
}

#[test]
fn unconverted_members_still_anchor() {
  let got = generate_str("struct A { char tag[3]; int a:8; };", &Options::default()).unwrap();
  assert_eq!(got[2], "    *(int*)((char*)&p->tag + sizeof(p->tag)) = ntohl(*(int*)((char*)&p->tag + sizeof(p->tag)));");
  assert_eq!(got.len(), 9);
}

#[test]
fn only_unconvertible_members() {
  let got = generate_str("struct C { char a; bool b; long double d; };", &Options::default()).unwrap();
  assert_eq!(got, ["void ReverseCToLittleEndian(C* p)", "{", "}", "", "void ReverseCToBigEndian(C* p)", "{", "}"]);
}

#[test]
fn empty_input() {
  assert!(generate::<&str>(&[], &Options::default()).unwrap().is_empty());
  assert!(generate_str("  \n\t\n", &Options::default()).unwrap().is_empty());
  assert!(generate_str("struct Nothing {\n// int i;\n};", &Options::default()).unwrap().is_empty());
}

#[test]
fn placeholder_and_explicit_name() {
  let got = generate_str("int i;", &Options::default()).unwrap();
  assert_eq!(got[0], "void ReverseStructToLittleEndian(Struct* p)");

  let opts = Options { name: Some("Header".into()), ..Default::default() };
  let got = generate_str("struct Foo { int i; };", &opts).unwrap();
  assert_eq!(got[0], "void ReverseHeaderToLittleEndian(Header* p)");
}

#[test]
fn eight_byte_long_offsets() {
  let opts = Options { long_bytes: LongWidth::Eight, ..Default::default() };
  let got = generate_str("struct L { int a; long x:40; long y:3; };", &opts).unwrap();
  assert_eq!(got[3], "    *(long*)((char*)&p->a + sizeof(p->a)) = ntohll(*(long*)((char*)&p->a + sizeof(p->a)));");
}

#[test]
fn unsupported_bit_field_produces_nothing() {
  let err = generate_str("struct E {\n  int i;\n  char c : 3;\n};", &Options::default()).unwrap_err();
  assert!(matches!(&err, Error::UnsupportedBitField { decl } if decl == "char c : 3"));
  assert_eq!(err.to_string(), "unsupported bit-field `char c : 3`");
}

#[test]
fn idempotent() {
  let opts = Options { layout: true, ..Default::default() };
  let a = generate_str(MIXED, &opts).unwrap();
  let b = generate_str(MIXED, &opts).unwrap();
  assert_eq!(a, b);
}
