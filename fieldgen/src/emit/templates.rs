//! Handlebars templates for generated source files

/// Dart immutable value object with map (de)serialization and `copy`
pub const DART_MODEL: &str = r"import 'package:equatable/equatable.dart';
import 'package:meta/meta.dart';

@immutable
class {{struct_name}} extends Equatable {
  final int id;
{{#each fields}}
  final {{dart_type}} {{camel}};
{{/each}}

  const {{struct_name}}(this.id{{#each fields}}, this.{{camel}}{{/each}});

  @override
  List<Object?> get props => [id{{#each fields}}, {{camel}}{{/each}}];

  Map<String, dynamic> toMap() {
    final data = <String, dynamic>{};
    data['id'] = id;
{{#each fields}}
    data['{{snake}}'] = {{camel}};
{{/each}}
    return data;
  }

  static {{struct_name}} fromMap(Map<String, dynamic> data) {
    return {{struct_name}}(
      data['id'] as int,
{{#each fields}}
{{#if is_collection}}
      {{dart_type}}.from(data['{{snake}}']),
{{else}}
      data['{{snake}}'] as {{dart_type}},
{{/if}}
{{/each}}
    );
  }

  {{struct_name}} copy({ {{~#each fields}}{{#unless @first}}, {{/unless}}{{dart_type}}? {{camel}}{{/each~}} }) {
    return {{struct_name}}(
      id,
{{#each fields}}
      {{camel}} ?? this.{{camel}},
{{/each}}
    );
  }
}
";

/// Server-side queryable struct
pub const RUST_MODEL: &str = r"#[doc(hidden)]
#[derive(Queryable, Serialize)]
pub struct {{struct_name}} {
{{#each fields}}
    pub {{snake}}: {{rust_type}},
{{/each}}
}
";

/// Diesel insertable record, DAO struct and `create` operation
pub const DAO: &str = r#"{{#if new_file}}
//! Dao implementation for {{name}}

use chrono::prelude::*;
use diesel::prelude::*;

use crate::models::{{struct_name}};
use crate::result::Result;
use crate::ID;

{{/if}}
#[derive(Insertable)]
#[table_name = "{{table_name}}"]
struct New{{struct_name}}{{#if borrows}}<'a>{{/if}} {
{{#each fields}}
    pub {{snake}}: {{insertable_type}},
{{/each}}
}

/// Data Access Object for {{name}}
#[derive(Dao)]
#[table_name = "{{table_name}}"]
pub struct {{struct_name}}Dao<'a> {
    db: &'a PgConnection,
}

impl<'a> {{struct_name}}Dao<'a> {
    /// Create new {{struct_name}}
    pub fn create(
        &self,
{{#each fields}}
        {{snake}}: {{insertable_type}},
{{/each}}
    ) -> Result<{{struct_name}}> {
        use crate::schema::{{table_name}};

        diesel::insert_into({{table_name}}::table)
            .values(&New{{struct_name}} {
{{#each fields}}
                {{snake}},
{{/each}}
            })
            .get_result(self.db)
            .map_err(From::from)
    }
}
"#;

/// Model-to-API-type conversion impl
pub const API_CONVERTER: &str = r"impl ToApiType<{{struct_name}}> for models::{{struct_name}} {
    fn to_api_type(&self, _conn: &PgConnection) -> {{struct_name}} {
        {{struct_name}} {
{{#each fields}}
            {{name}}: {{expr}},
{{/each}}
        }
    }
}
";
