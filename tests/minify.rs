use jscrunch::{MinifyError, minify};

fn assert_min(input: &str, expected: &str) {
    let actual = minify(input).unwrap_or_else(|err| {
        panic!(
            "minification failed\n\
             input:\n{input}\n\
             error: {err}"
        )
    });
    assert_eq!(
        actual, expected,
        "unexpected minified output\ninput:\n{input}"
    );
}

fn assert_min_err(input: &str, expected: MinifyError) {
    match minify(input) {
        Ok(output) => panic!(
            "expected failure\n\
             input:\n{input}\n\
             expected error: {expected}\n\
             actual output:\n{output}"
        ),
        Err(err) => assert_eq!(err, expected, "unexpected error kind\ninput:\n{input}"),
    }
}

#[test]
fn whitespace_and_comments_vanish() {
    assert_min("\r\t\x0c \x0b\n\r", "");
    assert_min("/* Foo *\n*bar\n*/", "");
    // Slashes inside block comments must not end the comment early and
    // leave a stray regex behind.
    assert_min(
        "/**\n * Foo\n * {\n * 'bar' : {\n * //Multiple rules with configurable operators\n * 'baz' : false\n * }\n */",
        "",
    );
    assert_min("// Foo b/ar baz", "");
}

#[test]
fn string_and_regex_bodies_survive_verbatim() {
    assert_min(
        "'  Foo  \\'  bar  \\\n  baz  \\'  quox  '  .length",
        "'  Foo  \\'  bar  \\\n  baz  \\'  quox  '.length",
    );
    assert_min(
        "\"  Foo  \\\"  bar  \\\n  baz  \\\"  quox  \"  .length",
        "\"  Foo  \\\"  bar  \\\n  baz  \\\"  quox  \".length",
    );
    assert_min(
        "/  Foo  \\/  bar  [  /  \\]  /  ]  baz  /  .length",
        "/  Foo  \\/  bar  [  /  \\]  /  ]  baz  /.length",
    );
}

#[test]
fn html_comments() {
    assert_min("<!-- Foo bar", "");
    assert_min("<!-- Foo --> bar", "");
    assert_min("--> Foo", "");
    assert_min("x --> y", "x-->y");
}

#[test]
fn semicolon_insertion() {
    assert_min("(function(){return\nx;})", "(function(){return\nx;})");
    assert_min("throw\nx;", "throw\nx;");
    assert_min("throw new\nError('x');", "throw new Error('x');");
    assert_min("while(p){continue\nx;}", "while(p){continue\nx;}");
    assert_min("while(p){break\nx;}", "while(p){break\nx;}");
    assert_min("var\nx;", "var x;");
    assert_min("x\ny;", "x\ny;");
    assert_min("x\n++y;", "x\n++y;");
    assert_min("x\n!y;", "x\n!y;");
    assert_min("x\n{y}", "x\n{y}");
    assert_min("x\n+y;", "x+y;");
    assert_min("x\n(y);", "x(y);");
    assert_min("5.\nx;", "5.\nx;");
    assert_min("0xFF.\nx;", "0xFF.x;");
    assert_min("5.3.\nx;", "5.3.x;");
}

#[test]
fn invalid_numeric_literals_fail() {
    assert_min_err("0x;", MinifyError::IncompleteHexLiteral);
    assert_min_err("1.4E", MinifyError::MissingExponentDigits);
    assert_min_err("1.4EE2", MinifyError::MissingExponentDigits);
    assert_min_err("1.4EE", MinifyError::MissingExponentDigits);
    assert_min_err("5...toString();", MinifyError::TooManyDecimalPoints);
}

#[test]
fn second_exponent_marker_starts_an_identifier() {
    assert_min("1.4E2E3", "1.4E2 E3");
}

#[test]
fn inline_comment_then_statement_keeps_the_newline() {
    assert_min(
        "var a = this //foo bar \n for ( b = 0; c < d; b++ ) {}",
        "var a=this\nfor(b=0;c<d;b++){}",
    );
}

#[test]
fn malformed_input_passes_through() {
    assert_min("*/", "*/");
    assert_min("/a[b/.test", "/a[b/.test");
    assert_min("'a", "'a");
}

#[test]
fn token_separation() {
    assert_min("x  in  y", "x in y");
    assert_min("/x/g  in  y", "/x/g in y");
    assert_min("x  in  30", "x in 30");
    assert_min("x  +  ++  y", "x+ ++y");
    assert_min("x ++  +  y", "x++ +y");
    assert_min("x  /  /y/.exec(z)", "x/ /y/.exec(z)");
}

#[test]
fn regex_vs_division() {
    assert_min("/  x/g", "/  x/g");
    assert_min("(function(){return/  x/g})", "(function(){return/  x/g})");
    assert_min("+/  x/g", "+/  x/g");
    assert_min("++/  x/g", "++/  x/g");
    assert_min("x/  x/g", "x/x/g");
    assert_min("(/  x/g)", "(/  x/g)");
    assert_min("if(/  x/g);", "if(/  x/g);");
    assert_min("(x/  x/g)", "(x/x/g)");
    assert_min("([/  x/g])", "([/  x/g])");
    assert_min("+x/  x/g", "+x/x/g");
    assert_min("{}/  x/g", "{}/  x/g");
    assert_min("+{}/  x/g", "+{}/x/g");
    assert_min("(x)/  x/g", "(x)/x/g");
    assert_min("if(x)/  x/g", "if(x)/  x/g");
    assert_min("for(x;x;{}/  x/g);", "for(x;x;{}/x/g);");
    assert_min("x;x;{}/  x/g", "x;x;{}/  x/g");
    assert_min("x:{}/  x/g", "x:{}/  x/g");
    assert_min(
        "switch(x){case y?z:{}/  x/g:{}/  x/g;}",
        "switch(x){case y?z:{}/x/g:{}/  x/g;}",
    );
    assert_min("function x(){}/  x/g", "function x(){}/  x/g");
    assert_min("+function x(){}/  x/g", "+function x(){}/x/g");
    assert_min(
        "alert( (10+10) / '/'.charCodeAt( 0 ) + '//' );",
        "alert((10+10)/'/'.charCodeAt(0)+'//');",
    );
    assert_min("if(1)/a /g.exec('Pa ss');", "if(1)/a /g.exec('Pa ss');");
}

#[test]
fn multiline_strings() {
    assert_min("var foo=\"\\\nblah\\\n\";", "var foo=\"\\\nblah\\\n\";");
    assert_min(
        "var foo=\"\\\nblah\\\n\";\nvar baz = \" foo \";\n",
        "var foo=\"\\\nblah\\\n\";var baz=\" foo \";",
    );
    assert_min(
        "aNode.setAttribute('href','http://foo.bar.org/baz');",
        "aNode.setAttribute('href','http://foo.bar.org/baz');",
    );
    assert_min(
        "var foo=\"\\\nblah\\\n\";\naNode.setAttribute('href','http://foo.bar.org/baz');",
        "var foo=\"\\\nblah\\\n\";aNode.setAttribute('href','http://foo.bar.org/baz');",
    );
}

#[test]
fn unicode_identifiers() {
    assert_min("var KaŝSkatolVal = {}", "var KaŝSkatolVal={}");
    assert_min("var Ka\\u015dSkatolVal = {}", "var Ka\\u015dSkatolVal={}");
}

#[test]
fn odd_but_valid_numbers() {
    assert_min("var a = 5.;", "var a=5.;");
    assert_min("5.0.toString();", "5.0.toString();");
    assert_min("5..toString();", "5..toString();");
    assert_min("5.\n.toString();", "5..toString();");
}

#[test]
fn boolean_rewrites() {
    assert_min("var a = { b: true };", "var a={b:!0};");
    assert_min("var a = { true: 12 };", "var a={true:12};");
    assert_min("a.true = 12;", "a.true=12;");
    assert_min("a.foo = b?.true;", "a.foo=b?.true;");
    assert_min("a.foo = b?.false ?? true;", "a.foo=b?.false??!0;");
    assert_min("a.foo = true;", "a.foo=!0;");
    assert_min("a.foo = false;", "a.foo=!1;");
    assert_min("a.foo = bar ? false : true;", "a.foo=bar?!1:!0;");
    assert_min("func( true, false )", "func(!0,!1)");
    assert_min("function f() { return false; }", "function f(){return!1;}");
    assert_min("let f = () => false;", "let f=()=>!1;");
}

#[test]
fn template_strings() {
    assert_min(
        "let a = `foo + ${ 1 + 2 } + bar`;",
        "let a=`foo + ${1+2} + bar`;",
    );
    assert_min(
        "let a = `foo + ${ \"hello world\" } + bar`;",
        "let a=`foo + ${\"hello world\"} + bar`;",
    );
    assert_min(
        "let a = `foo + ${ `bar + ${ `baz + ${ `quux` } + lol` } + ${ `yikes` } ` }`, b = 3;",
        "let a=`foo + ${`bar + ${`baz + ${`quux`} + lol`} + ${`yikes`} `}`,b=3;",
    );
    // Template text has no escape sequences: the backslash does not
    // protect the backtick.
    assert_min("let a = `foo$\\` + 23;", "let a=`foo$\\`+23;");
}

#[test]
fn yield_in_generators_vs_functions() {
    assert_min(
        "function *f( x ) {\n if ( x )\n yield\n ( 42 )\n}",
        "function*f(x){if(x)yield\n(42)}",
    );
    assert_min(
        "function g( y ) {\n const yield = 42\n yield\n ( 42 )\n}",
        "function g(y){const yield=42\nyield(42)}",
    );
    // Normal function nested inside a generator function.
    assert_min(
        "function *f( x ) {\n\tif ( x )\n\t\tyield\n\t\t( 42 )\n\tfunction g() {\n\t\tconst yield = 42\n\t\tyield\n\t\t( 42 )\n\t\treturn\n\t\t42\n\t}\n\tyield\n\t42\n}",
        "function*f(x){if(x)yield\n(42)\nfunction g(){const yield=42\nyield(42)\nreturn\n42}yield\n42}",
    );
}

#[test]
fn object_literals() {
    assert_min(
        "let a = { foo, bar: 'baz', [21 * 2]: 'answer' }",
        "let a={foo,bar:'baz',[21*2]:'answer'}",
    );
    assert_min(
        "let a = { [( function ( x ) {\n if ( x )\nreturn\nx*2 } ( 21 ) )]: 'wrongAnswer' }",
        "let a={[(function(x){if(x)return\nx*2}(21))]:'wrongAnswer'}",
    );
    assert_min(
        "let a = { foo() { if ( x )\n return\n 42 }, bar: 21 * 2 };",
        "let a={foo(){if(x)return\n42},bar:21*2};",
    );
    assert_min(
        "let a = { *f() { yield\n(42); }, g() { let yield = 42; yield\n(42); };",
        "let a={*f(){yield\n(42);},g(){let yield=42;yield(42);};",
    );
    assert_min(
        "function *f() { return { g() { let yield = 42; yield\n(42); } }; }",
        "function*f(){return{g(){let yield=42;yield(42);}};}",
    );
    assert_min(
        "function *f() { return { *h() { yield\n(42); } }; }",
        "function*f(){return{*h(){yield\n(42);}};}",
    );
}

#[test]
fn classes() {
    assert_min(
        "class Foo { *f() { yield\n(42); }, g() { let yield = 42; yield\n(42); } }",
        "class Foo{*f(){yield\n(42);},g(){let yield=42;yield(42);}}",
    );
    assert_min(
        "class Foo { static *f() { yield\n(42); }, static g() { let yield = 42; yield\n(42); } }",
        "class Foo{static*f(){yield\n(42);},static g(){let yield=42;yield(42);}}",
    );
    assert_min(
        "class Foo { get bar() { return\n42 } set baz( val ) { throw new Error( 'yikes' ) } }",
        "class Foo{get bar(){return\n42}set baz(val){throw new Error('yikes')}}",
    );
}

#[test]
fn class_extends() {
    assert_min(
        "class Foo extends Bar { f() { return\n42 } }",
        "class Foo extends Bar{f(){return\n42}}",
    );
    assert_min(
        "class Foo extends Bar.Baz { f() { return\n42 } }",
        "class Foo extends Bar.Baz{f(){return\n42}}",
    );
    assert_min(
        "class Foo extends (function (x) { return\n x.Baz; }(Bar)) { f() { return\n42 } }",
        "class Foo extends(function(x){return\nx.Baz;}(Bar)){f(){return\n42}}",
    );
    assert_min(
        "class Foo extends function(x) {return\n 42} { *f() { yield\n 42 } }",
        "class Foo extends function(x){return\n42}{*f(){yield\n42}}",
    );
}

#[test]
fn arrow_functions() {
    assert_min("let a = ( x, y ) => x + y;", "let a=(x,y)=>x+y;");
    assert_min(
        "let a = ( x, y ) => { return \n x + y };",
        "let a=(x,y)=>{return\nx+y};",
    );
    // A newline after an arrow body ends the statement...
    assert_min(
        "let a = ( x, y ) => { return x + y; }\n( 1, 2 )",
        "let a=(x,y)=>{return x+y;}\n(1,2)",
    );
    assert_min(
        "let a = ( x, y ) => { return x + y; }\n+5",
        "let a=(x,y)=>{return x+y;}\n+5",
    );
    // ...while after a function expression body it does not.
    assert_min(
        "let a = function ( x, y ) { return x + y; }\n( 1, 2 )",
        "let a=function(x,y){return x+y;}(1,2)",
    );
    assert_min(
        "let a = function ( x, y ) { return x + y; }\n+5",
        "let a=function(x,y){return x+y;}+5",
    );
}

#[test]
fn module_syntax() {
    assert_min(
        "export { Foo, Bar as Baz } from 'thingy';",
        "export{Foo,Bar as Baz}from'thingy';",
    );
    assert_min("export * from 'thingy';", "export*from'thingy';");
    assert_min(
        "export class Foo { f() { return\n 42 } }",
        "export class Foo{f(){return\n42}}",
    );
    assert_min(
        "export default class Foo { *f() { yield\n 42 } }",
        "export default class Foo{*f(){yield\n42}}",
    );
    assert_min(
        "import { Foo, Bar as Baz, Quux } from 'thingy';",
        "import{Foo,Bar as Baz,Quux}from'thingy';",
    );
    assert_min("import * as Foo from 'thingy';", "import*as Foo from'thingy';");
    assert_min(
        "import Foo, * as Bar from 'thingy';",
        "import Foo,*as Bar from'thingy';",
    );
    // Semicolon insertion before import/export.
    assert_min(
        "( x, y ) => { return x + y; }\nexport class Foo {}",
        "(x,y)=>{return x+y;}\nexport class Foo{}",
    );
    assert_min(
        "let x = y + 3\nimport Foo from 'thingy';",
        "let x=y+3\nimport Foo from'thingy';",
    );
}
